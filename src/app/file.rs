use std::fs;
use std::path::Path;

use super::types::EditorError;

/// Reads a file as a sequence of lines split on `\n`. A `\r` before the
/// terminator stays in the line so that writing it back is byte-exact.
/// Invalid UTF-8 is replaced with U+FFFD rather than rejecting the file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, EditorError> {
    let bytes = fs::read(path).map_err(|source| EditorError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .strip_suffix('\n')
        .unwrap_or(content)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Overwrites (or creates) `path`, terminating every line with `\n`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), EditorError> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content).map_err(|source| EditorError::FileUnwritable {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_gets_a_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_lines(&path, &["a".to_string(), String::new(), "c".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nc\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "", "c"]);
    }

    #[test]
    fn split_handles_missing_final_terminator_and_blank_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn carriage_returns_survive_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["one\r", "two\r"]);

        write_lines(&path, &lines).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"one\r\ntwo\r\n");

        let trailing_cr = vec!["x\r".to_string()];
        write_lines(&path, &trailing_cr).unwrap();
        assert_eq!(read_lines(&path).unwrap(), trailing_cr);
    }

    #[test]
    fn invalid_utf8_is_loaded_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\nsecond line\n").unwrap();
        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["caf\u{FFFD}", "second line"]
        );
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, EditorError::FileUnreadable { .. }));
    }

    #[test]
    fn writing_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_lines(&dir.path().join("no/such/dir.txt"), &[]).unwrap_err();
        assert!(matches!(err, EditorError::FileUnwritable { .. }));
    }
}
