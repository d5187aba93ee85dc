//! Parser for FASTA files using noodles.
//!
//! Loads every record of a FASTA file into a [`ReferenceCollection`], keeping
//! file order. Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::collection::ReferenceCollection;
use crate::core::sequence::ReferenceSequence;
use crate::parsing::ParseError;
use crate::utils::validation::is_dna_sequence;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Content is parsed as FASTA regardless; an unexpected extension is only logged
fn warn_unless_fasta(path: &Path) {
    if !is_fasta_file(path) {
        warn!(
            path = %path.display(),
            "File does not have a FASTA extension (.fa, .fasta, .fna, optionally .gz/.bgz)"
        );
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file, transparently decompressing gzip/bgzip
fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        // bgzip is a series of gzip members
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(reader)))
}

/// Load every record of a FASTA file as a reference collection.
///
/// Record names become identifiers, the rest of each definition line becomes
/// the description, and sequences are uppercased.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta` if
/// a record is malformed, `ParseError::InvalidFormat` if no records are found,
/// or `ParseError::Collection` for duplicate names or too many records.
pub fn load_references(path: &Path) -> Result<ReferenceCollection, ParseError> {
    warn_unless_fasta(path);
    let collection = read_references(open_reader(path)?)?;
    debug!(
        path = %path.display(),
        references = collection.len(),
        "Loaded reference sequences"
    );
    Ok(collection)
}

/// Read a reference collection from any buffered FASTA source.
///
/// # Errors
///
/// See [`load_references`].
pub fn read_references<R: BufRead>(reader: R) -> Result<ReferenceCollection, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut collection = ReferenceCollection::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Fasta(format!("Failed to parse FASTA record: {e}")))?;

        let reference = record_to_reference(&record);
        if reference.is_empty() {
            warn!(id = %reference.id, "FASTA record has an empty sequence");
        } else if !is_dna_sequence(&reference.sequence) {
            debug!(
                id = %reference.id,
                "Sequence contains bases other than A, C, G, T; k-mers spanning them never match"
            );
        }

        collection.add(reference)?;
    }

    if collection.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(collection)
}

/// Read the first record of a FASTA file, for use as a query.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta` if the
/// record is malformed, or `ParseError::InvalidFormat` if the file has no records.
pub fn load_first_sequence(path: &Path) -> Result<ReferenceSequence, ParseError> {
    warn_unless_fasta(path);
    let mut fasta_reader = fasta::io::Reader::new(open_reader(path)?);

    let record = fasta_reader
        .records()
        .next()
        .ok_or_else(|| {
            ParseError::InvalidFormat("No sequences found in FASTA file".to_string())
        })?
        .map_err(|e| ParseError::Fasta(format!("Failed to parse FASTA record: {e}")))?;

    Ok(record_to_reference(&record))
}

fn record_to_reference(record: &fasta::Record) -> ReferenceSequence {
    let name = String::from_utf8_lossy(record.name()).to_string();
    let description = record
        .description()
        .map(|d| String::from_utf8_lossy(d).trim().to_string())
        .unwrap_or_default();

    // Uppercase so soft-masked (lowercase) regions match the uppercase query
    let sequence: String = record
        .sequence()
        .as_ref()
        .iter()
        .map(|&b| char::from(b.to_ascii_uppercase()))
        .collect();

    ReferenceSequence::new(name, description, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SequenceId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.bam")));
        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_load_references() {
        let fasta_content = b">R1 first reference\nACGTACGT\nACGT\n>R2\nggggTTTT\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let collection = load_references(temp.path()).unwrap();
        assert_eq!(collection.len(), 2);

        let r1 = collection.get_index(0).unwrap();
        assert_eq!(r1.id.as_str(), "R1");
        assert_eq!(r1.description, "first reference");
        assert_eq!(r1.sequence, "ACGTACGTACGT");

        let r2 = collection.get(&SequenceId::new("R2")).unwrap();
        assert_eq!(r2.description, "");
        assert_eq!(r2.sequence, "GGGGTTTT");
    }

    #[test]
    fn test_load_gzipped_references() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        {
            let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
            encoder.write_all(b">chrA\nACGT\n>chrB\nTTTT\n").unwrap();
            encoder.finish().unwrap();
        }

        let collection = load_references(temp.path()).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get_index(1).unwrap().id.as_str(), "chrB");
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = load_references(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = read_references(&b">R1\nACGT\n>R1\nTTTT\n"[..]);
        assert!(matches!(result, Err(ParseError::Collection(_))));
    }

    #[test]
    fn test_load_first_sequence() {
        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(b">query sample\nacgt\nACGT\n>other\nTTTT\n")
            .unwrap();
        temp.flush().unwrap();

        let query = load_first_sequence(temp.path()).unwrap();
        assert_eq!(query.id.as_str(), "query");
        assert_eq!(query.sequence, "ACGTACGT");
    }

    #[test]
    fn test_load_references_with_other_extension() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all(b">R1\nACGT\n").unwrap();
        temp.flush().unwrap();

        assert!(!is_fasta_file(temp.path()));
        let collection = load_references(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(load_first_sequence(temp.path()).unwrap().sequence, "ACGT");
    }

    #[test]
    fn test_missing_file() {
        let result = load_references(Path::new("/nonexistent/refs.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
