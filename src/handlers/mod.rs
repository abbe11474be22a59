// handlers/mod.rs - Handler tiers
//
// Public (no session needed) → Protected pages (edge gate + page re-check)
// → API (exempt from the edge gate, gated per route where needed)
pub mod api;
pub mod protected;
pub mod public;
