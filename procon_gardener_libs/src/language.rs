const FILE_STEM: &str = "Main";
const FALLBACK_EXTENSION: &str = ".txt";

/// Labels that carry version numbers after the language name, e.g. `C++14`, `Python3`.
/// Checked in order before the exact table.
const PREFIXES: &[(&str, &str)] = &[
    ("C++", ".cpp"),
    ("C#", ".cs"),
    ("Bash", ".sh"),
    ("Common Lisp", ".lisp"),
    ("Python", ".py"),
    ("PyPy", ".py"),
    ("JavaScript", ".js"),
    ("TypeScript", ".ts"),
    ("Java", ".java"),
];

const NAMES: &[(&str, &str)] = &[
    ("C", ".c"),
    ("Clojure", ".clj"),
    ("D", ".d"),
    ("Fortran", ".f08"),
    ("Go", ".go"),
    ("Haskell", ".hs"),
    ("OCaml", ".ml"),
    ("Pascal", ".pas"),
    ("Perl", ".pl"),
    ("PHP", ".php"),
    ("Ruby", ".rb"),
    ("Scala", ".scala"),
    ("Scheme", ".scm"),
    ("Visual Basic", ".vb"),
    ("Objective-C", ".m"),
    ("Swift", ".swift"),
    ("Rust", ".rs"),
    ("Sed", ".sed"),
    ("Awk", ".awk"),
    ("Brainfuck", ".bf"),
    ("Standard ML", ".sml"),
    ("Crystal", ".cr"),
    ("F#", ".fs"),
    ("Unlambda", ".unl"),
    ("Lua", ".lua"),
    ("LuaJIT", ".lua"),
    ("MoonScript", ".moon"),
    ("Ceylon", ".ceylon"),
    ("Julia", ".jl"),
    ("Octave", ".m"),
    ("Nim", ".nim"),
    ("Perl6", ".p6"),
    ("Kotlin", ".kt"),
    ("COBOL", ".cob"),
];

/// 言語名から保存するファイル名を決める関数
///
/// `C++14 (GCC 5.4.1)`のような表記は括弧より前だけを見る。
/// 対応表にない言語は`Main.txt`になる。
pub fn file_name(language: &str) -> String {
    let name = language.split('(').next().unwrap_or_default().trim();

    let extension = PREFIXES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .or_else(|| NAMES.iter().find(|(label, _)| *label == name))
        .map(|(_, extension)| *extension)
        .unwrap_or_else(|| {
            tracing::warn!("Unknown language {:?}, archived as {}", language, FALLBACK_EXTENSION);
            FALLBACK_EXTENSION
        });

    format!("{}{}", FILE_STEM, extension)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_versioned_labels_by_prefix() {
        assert_eq!(file_name("C++14 (GCC 5.4.1)"), "Main.cpp");
        assert_eq!(file_name("C++ 20 (gcc 12.2)"), "Main.cpp");
        assert_eq!(file_name("Python3 (3.8.2)"), "Main.py");
        assert_eq!(file_name("PyPy3 (7.3.0)"), "Main.py");
        assert_eq!(file_name("Bash (5.0.11)"), "Main.sh");
        assert_eq!(file_name("C# 11.0 (.NET 7.0.7)"), "Main.cs");
        assert_eq!(file_name("TypeScript 5.1 (Node.js 18.16.1)"), "Main.ts");
    }

    #[test]
    fn check_javascript_before_java() {
        assert_eq!(file_name("JavaScript (Node.js 12.16.1)"), "Main.js");
        assert_eq!(file_name("Java (OpenJDK 11.0.6)"), "Main.java");
        assert_eq!(file_name("Java8 (OpenJDK 1.8.0)"), "Main.java");
    }

    #[test]
    fn map_exact_labels() {
        assert_eq!(file_name("C (GCC 9.2.1)"), "Main.c");
        assert_eq!(file_name("Rust (1.42.0)"), "Main.rs");
        assert_eq!(file_name("Haskell (GHC 8.8.3)"), "Main.hs");
        assert_eq!(file_name("Perl6 (Rakudo 2018.12)"), "Main.p6");
        assert_eq!(file_name("Perl (5.26.1)"), "Main.pl");
        assert_eq!(file_name("Go"), "Main.go");
    }

    #[test]
    fn exact_table_does_not_match_partial_names() {
        assert_eq!(file_name("Crystal (0.33.0)"), "Main.cr");
        assert_eq!(file_name("Cobra (0.1)"), "Main.txt");
    }

    #[test]
    fn fall_back_to_text_file() {
        assert_eq!(file_name("Whitespace (0.0.1)"), "Main.txt");
        assert_eq!(file_name(""), "Main.txt");
    }
}
