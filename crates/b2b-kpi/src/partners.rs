use std::collections::BTreeMap;

use rand::Rng;

use b2b_types::{LogoCatalog, PartnerRecord, PartnersByNetwork};

/// Maximum number of partners shown at once.
pub const DISPLAY_SAMPLE_SIZE: usize = 9;

/// Collapse every vault into one record per partner, keyed by short name.
///
/// Vaults are visited in `PartnersByNetwork` traversal order (ascending
/// network id, then vault id) and a later vault with the same short name
/// replaces the earlier record entirely.
pub fn deduplicate_partners(
    partners: &PartnersByNetwork,
    catalog: &LogoCatalog,
) -> BTreeMap<String, PartnerRecord> {
    let mut records = BTreeMap::new();

    for (_, _, vault) in partners.vaults() {
        let short_name = vault.short_name();
        let record = PartnerRecord {
            name: vault.full_name.clone(),
            logo: catalog.resolve(&short_name).clone(),
            description: vault.description.clone(),
            short_name: short_name.clone(),
        };
        records.insert(short_name, record);
    }

    records
}

/// In-place Fisher-Yates shuffle. `j` is drawn from `0..=i` so every
/// permutation is equally likely.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle `records` and keep the first [`DISPLAY_SAMPLE_SIZE`].
pub fn sample_partners<R>(
    records: impl IntoIterator<Item = PartnerRecord>,
    rng: &mut R,
) -> Vec<PartnerRecord>
where
    R: Rng + ?Sized,
{
    let mut sample: Vec<PartnerRecord> = records.into_iter().collect();
    shuffle(&mut sample, rng);
    sample.truncate(DISPLAY_SAMPLE_SIZE);
    sample
}

/// Deduplicate the raw partner vaults and draw a display sample from them.
pub fn aggregate_partners<R>(
    partners: &PartnersByNetwork,
    catalog: &LogoCatalog,
    rng: &mut R,
) -> Vec<PartnerRecord>
where
    R: Rng + ?Sized,
{
    let records = deduplicate_partners(partners, catalog);

    tracing::debug!(
        vaults = partners.vault_count(),
        partners = records.len(),
        "Deduplicated partner vaults"
    );

    sample_partners(records.into_values(), rng)
}
