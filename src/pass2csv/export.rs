use crate::decrypt::Decrypt;
use crate::error::Result;
use crate::record::{Record, FIELD_NAMES};
use crate::store::PasswordStore;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Export every entry under `subfolder` (or the whole store) as CSV on
/// `sink`: one header row, then one row per entry in discovery order.
/// Returns the number of records written. The first decryption or
/// filesystem error aborts the run; rows already written stay written.
pub fn run<D: Decrypt, W: Write>(
    store: &PasswordStore,
    decryptor: &D,
    subfolder: Option<&Path>,
    sink: W,
) -> Result<usize> {
    // Validate the scan base before a single byte is written.
    let entries = store.entries(subfolder)?;

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(FIELD_NAMES)?;

    let mut count = 0;
    for entry in entries {
        let path = entry?;
        let record = read_entry(store, decryptor, &path)?;
        write_row(&mut writer, &record)?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

fn read_entry<D: Decrypt>(
    store: &PasswordStore,
    decryptor: &D,
    path: &Path,
) -> Result<Record> {
    let metadata = fs::metadata(path)?;
    let modified = metadata.modified()?;
    // Not every filesystem records a birth time; fall back to mtime there.
    let created = metadata.created().unwrap_or(modified);

    let plaintext = decryptor.decrypt(path)?;

    Ok(Record::from_entry(
        store.root(),
        path,
        &plaintext,
        created,
        modified,
    ))
}

fn write_row<W: Write>(writer: &mut csv::Writer<W>, record: &Record) -> Result<()> {
    let row = FIELD_NAMES
        .iter()
        .map(|name| record.field(name).unwrap_or(""));
    writer.write_record(row)?;
    Ok(())
}
