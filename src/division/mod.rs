//! Division classification.
//!
//! Maps an entrant's age and gender onto one of the fixed, non-overlapping
//! age bands used by the tournament:
//!
//! | Age   | Division                    |
//! |-------|-----------------------------|
//! | ≤ 8   | `8U Coed`                   |
//! | 9–12  | `9-12 Coed`                 |
//! | 13–15 | `13-15 {gender}`            |
//! | 16–34 | `Adult (16+) {gender}`      |
//! | 35–39 | `Masters I (35+) {gender}`  |
//! | 40–44 | `Masters II (40+) {gender}` |
//! | ≥ 45  | `Masters III (45+) {gender}`|
//!
//! [`Division::Open`] is not produced by classification; it labels manually
//! created brackets and sorts after every age band.

mod classifier;

pub use classifier::{classify, Division};
