//! Subcommand implementations.

use crate::cli::VaultArgs;
use crate::error::CliResult;
use seqnote_core::{
    allocate_and_claim, convert, core_version, load_collection, AllocationRequest, NoteFileName,
    Scheme, SequenceService, DEFAULT_CLAIM_ATTEMPTS,
};
use std::path::Path;

pub fn split(service: &SequenceService, address: &str) -> CliResult<()> {
    for component in service.split(address)?.components() {
        println!("{component}");
    }
    Ok(())
}

pub fn convert_address(address: &str, target: Scheme) -> CliResult<()> {
    println!("{}", convert(address, target)?);
    Ok(())
}

pub fn allocate(
    service: &SequenceService,
    request: AllocationRequest,
    vault: &VaultArgs,
) -> CliResult<()> {
    if let Some(template) = &vault.create {
        let claimed = allocate_and_claim(
            vault.dir.as_path(),
            service.scheme(),
            &request,
            &NoteFileName::parse(template),
            DEFAULT_CLAIM_ATTEMPTS,
        )?;
        println!("{}", claimed.path.display());
        return Ok(());
    }

    let collection = load_collection(vault.dir.as_path(), service.scheme())?;
    let address = match &request {
        AllocationRequest::Child(target) => service.new_child(target, &collection)?,
        AllocationRequest::Sibling(target) => service.new_sibling(target, &collection)?,
        AllocationRequest::Root => service.new_root(&collection)?,
    };
    println!("{address}");
    Ok(())
}

pub fn tree(service: &SequenceService, dir: &Path) -> CliResult<()> {
    let collection = load_collection(dir, service.scheme())?;
    for sequence in collection.sorted() {
        let indent = "  ".repeat(sequence.depth() - 1);
        println!("{indent}{sequence}");
    }
    Ok(())
}

pub fn version() -> CliResult<()> {
    println!("seqnote_core version={}", core_version());
    Ok(())
}
