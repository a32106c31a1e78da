mod caa_lookup;

pub use caa_lookup::CaaLookup;
