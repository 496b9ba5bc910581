use crate::bench::{Result, Row};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER: [&str; 5] = ["Elements", "Insert (ns)", "Find (ns)", "Erase (ns)", "Memory (KiB)"];

/// Writes `rows` as a pipe separated table.
///
/// # Examples
///
/// ```
/// use dictionaries::bench::{write_report, Row};
///
/// let rows = vec![Row { elements: 10, insert_ns: 120, find_ns: 40, erase_ns: 90, memory_kib: 1 }];
/// let mut output = Vec::new();
/// write_report(&mut output, &rows).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.starts_with("Elements"));
/// assert_eq!(output.lines().count(), 3);
/// ```
pub fn write_report<W>(writer: &mut W, rows: &[Row]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        writer,
        "{:<10} | {:>12} | {:>12} | {:>12} | {:>12}",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4],
    )?;
    writeln!(writer, "{}", "-".repeat(70))?;
    for row in rows {
        writeln!(
            writer,
            "{:<10} | {:>12} | {:>12} | {:>12} | {:>12}",
            row.elements, row.insert_ns, row.find_ns, row.erase_ns, row.memory_kib,
        )?;
    }
    Ok(())
}

pub fn write_report_file<P>(path: P, rows: &[Row]) -> Result<()>
where
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_report, write_report_file};
    use crate::bench::Row;
    use std::env;
    use std::fs;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                elements: 10,
                insert_ns: 1_500,
                find_ns: 700,
                erase_ns: 1_100,
                memory_kib: 0,
            },
            Row {
                elements: 100,
                insert_ns: 21_000,
                find_ns: 9_000,
                erase_ns: 17_000,
                memory_kib: 6,
            },
        ]
    }

    #[test]
    fn test_write_report() {
        let mut output = Vec::new();
        write_report(&mut output, &rows()).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Memory (KiB)"));
        assert!(lines[1].chars().all(|c| c == '-'));
        let columns: Vec<&str> = lines[3].split('|').map(|column| column.trim()).collect();
        assert_eq!(columns, vec!["100", "21000", "9000", "17000", "6"]);
    }

    #[test]
    fn test_write_report_file() {
        let path = env::temp_dir().join("dictionaries_test_report.txt");
        write_report_file(&path, &rows()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("1500"));
        fs::remove_file(&path).unwrap();
    }
}
