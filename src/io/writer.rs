use crate::apriori::FrequentItemset;
use crate::error::Result;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one line per itemset: the items, then the frequency, comma separated.
pub fn write_csv<I, W>(writer: &mut W, itemsets: &[FrequentItemset<I>]) -> Result<()>
where
    I: Display,
    W: Write,
{
    for itemset in itemsets {
        for item in &itemset.items {
            write!(writer, "{item},")?;
        }
        writeln!(writer, "{}", itemset.frequency)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv_file<I, P>(path: P, itemsets: &[FrequentItemset<I>]) -> Result<()>
where
    I: Display,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_csv(&mut writer, itemsets)?;
    log::info!(
        "wrote {} itemsets to {}",
        itemsets.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// `<dir>/<stem>_sigma<sigma>_setsize<min_set_size>.csv` for an input at `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path, sigma: usize, min_set_size: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_sigma{sigma}_setsize{min_set_size}.csv"))
}
