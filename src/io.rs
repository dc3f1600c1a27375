//! Plain-text reconstruction reports.
//!
//! A report lists the outcome followed by every candidate of the vote with
//! its count and witness subsets, one record per line.  Reports are written
//! as numbered files (`prefix_0001.txt`, `prefix_0002.txt`, …) so repeated
//! runs against the same directory never overwrite each other's output.

use crate::recovery::Reconstruction;
use crate::share::Share;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Renders the report lines for `result`.
///
/// Witness subsets are printed as share indices rather than positions.
pub fn report_lines(result: &Reconstruction, shares: &[Share]) -> Vec<String> {
    let mut lines = vec![
        format!("secret:{}", result.secret),
        format!("wrong:{}", join(&result.wrong_shares)),
        format!("witness:{}", join(&result.witness)),
        format!(
            "votes:{} evaluated:{} abstained:{} contested:{}",
            result.votes, result.evaluated, result.abstained, result.contested
        ),
    ];
    for candidate in result.tally.candidates() {
        let witnesses = candidate
            .witnesses
            .iter()
            .map(|combo| {
                let xs: Vec<u64> = combo.iter().map(|&i| shares[i].x).collect();
                join(&xs)
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(format!(
            "candidate:{} count:{} witnesses:{}",
            candidate.value, candidate.count, witnesses
        ));
    }
    lines
}

fn join(xs: &[u64]) -> String {
    xs.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the first unused `prefix_NNNN.txt` index in `base_dir`.
pub fn next_report_index(base_dir: impl AsRef<Path>, prefix: &str) -> usize {
    let dir = base_dir.as_ref();
    (1..)
        .find(|&i| !dir.join(report_name(prefix, i)).exists())
        .unwrap_or(1)
}

fn report_name(prefix: &str, index: usize) -> String {
    format!("{}_{:04}.txt", prefix, index)
}

/// Writes `lines` to `base_dir/prefix_index.txt`, creating the directory.
pub fn write_text_series(
    base_dir: impl AsRef<Path>,
    prefix: &str,
    index: usize,
    lines: &[String],
) -> io::Result<PathBuf> {
    let dir = base_dir.as_ref();
    create_dir_all(dir)?;
    let path = dir.join(report_name(prefix, index));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecoveryConfig;
    use crate::recovery::reconstruct_shares;
    use crate::share::{decode_shares, ShareContainer};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn small() -> (Reconstruction, Vec<Share>) {
        let container =
            ShareContainer::from_json(include_str!("../demos/data/small.json")).unwrap();
        let shares = decode_shares(&container).unwrap();
        let result = reconstruct_shares(&shares, 3, &RecoveryConfig::default()).unwrap();
        (result, shares)
    }

    #[test]
    fn test_report_lines() {
        let (result, shares) = small();
        let lines = report_lines(&result, &shares);
        assert_eq!(lines[0], "secret:3");
        assert_eq!(lines[1], "wrong:");
        assert_eq!(lines[2], "witness:1 2 3");
        assert_eq!(lines[3], "votes:4 evaluated:4 abstained:0 contested:false");
        assert_eq!(
            lines[4],
            "candidate:3 count:4 witnesses:1 2 3,1 2 6,1 3 6,2 3 6"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_write_text_series() {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let tmp_dir = std::env::temp_dir().join(format!("share_consensus_test_{}", unique));
        let lines = vec!["secret:3".to_string(), "wrong:".to_string()];

        let first = next_report_index(&tmp_dir, "recover");
        assert_eq!(first, 1);
        let path = write_text_series(&tmp_dir, "recover", first, &lines).unwrap();
        assert!(path.ends_with(PathBuf::from("recover_0001.txt")));
        assert_eq!(fs::read_to_string(&path).unwrap(), "secret:3\nwrong:\n");
        assert_eq!(next_report_index(&tmp_dir, "recover"), 2);

        fs::remove_dir_all(&tmp_dir).unwrap();
    }
}
