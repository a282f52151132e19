use crate::cli::InfoArgs;
use crate::error::Result;
use promol::core::data::provider::AtomicDataset;
use promol::core::data::store::DatasetStore;
use tracing::info;

pub fn run(args: InfoArgs) -> Result<()> {
    let store = DatasetStore::load(&args.dataset)?;
    info!(
        dataset = store.name(),
        species = store.len(),
        "Dataset loaded."
    );

    println!(
        "Dataset '{}': {} tabulated species",
        store.name(),
        store.len()
    );
    for key in store.species_keys() {
        let Some(record) = store.lookup(&key) else {
            continue;
        };
        let kinetic = if record.radial.has_kinetic() {
            "yes"
        } else {
            "no"
        };
        println!(
            "  {:<40} mass {:>12.6}  energy {:>14.6}  ked {}",
            key.to_string(),
            record.mass,
            record.energy,
            kinetic
        );
    }

    Ok(())
}
