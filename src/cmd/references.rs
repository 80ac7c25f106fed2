use crate::reports;
use clap::Args;
use lexilevel::config::Config;
use lexilevel::ReferenceSet;

#[derive(Args, Debug, Clone)]
pub struct ReferencesArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(references: &ReferenceSet) {
    println!("\n📖 === LOADED REFERENCES === 📖");
    reports::print_reference_inventory(&references.hsk);
    reports::print_reference_inventory(&references.tocfl);
    reports::print_reference_inventory(&references.ic);
}
