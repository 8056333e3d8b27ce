use std::path::{Path, PathBuf};
use std::str::FromStr;

pub fn path(rawpath: &str) -> Result<(), String> {
    if !Path::new(&rawpath).exists() {
        Err(format!("{} doesn't exist or there is no permission to read it", rawpath))
    } else {
        Ok(())
    }
}

/// BAM plus a .bai next to it (either file.bam.bai or file.bai).
pub fn indexed_bam(rawpath: &str) -> Result<(), String> {
    path(rawpath)?;

    let appended = PathBuf::from(format!("{}.bai", rawpath));
    let replaced = Path::new(&rawpath).with_extension("bai");
    if !appended.exists() && !replaced.exists() {
        return Err(format!("{} is not indexed, run samtools index first", rawpath));
    }
    Ok(())
}

pub fn writable(_rawpath: &str) -> Result<(), String> {
    // TODO: are there any good way to actually check that file is writeable?
    Ok(())
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Sized,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    move |val: &str| -> Result<(), String> {
        let parsed = match val.parse::<T>() {
            Ok(x) => x,
            Err(_) => return Err(format!("failed to parse {}", val)),
        };
        if parsed < low || parsed > upper {
            return Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper));
        }
        Ok(())
    }
}
