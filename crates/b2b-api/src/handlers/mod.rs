pub mod partners;

pub use partners::{get_partner, get_partner_metrics, list_partners};
