const FALLBACK: &str = "txt";

// Checked in order, first match wins.
const EXTENSIONS: &[(&[&str], &str)] = &[
    (&["Python", "PyPy"], "py"),
    (&["Java"], "java"),
    (&["C++", "Clang++"], "cpp"),
    (&["C#"], "cs"),
    (&["FPC", "Delphi"], "pas"),
];

/// File extension for a programming language label reported by the judge.
pub fn extension(language: &str) -> &'static str {
    EXTENSIONS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| language.contains(m)))
        .map_or(FALLBACK, |(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::extension;

    #[test]
    fn known_labels() {
        assert_eq!(extension("PyPy 3-64"), "py");
        assert_eq!(extension("Python 3"), "py");
        assert_eq!(extension("GNU C++17"), "cpp");
        assert_eq!(extension("Clang++20 Diagnostics"), "cpp");
        assert_eq!(extension("Mono C#"), "cs");
        assert_eq!(extension("Java 21 64bit"), "java");
        assert_eq!(extension("Delphi"), "pas");
        assert_eq!(extension("FPC 3.2.2"), "pas");
    }

    #[test]
    fn unknown_labels_fall_back_to_txt() {
        assert_eq!(extension("Go"), "txt");
        assert_eq!(extension("GNU C11"), "txt");
        assert_eq!(extension(""), "txt");
    }
}
