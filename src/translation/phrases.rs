/*!
 * Phrase table for literal German to English substitution.
 *
 * The table is an ordered list of pairs. Every entry is applied to the
 * output of the previous one, so a longer compound must come before any
 * shorter key it contains.
 */

use log::debug;
use once_cell::sync::Lazy;

/// Built-in phrase pairs, in application order
const BUILTIN_PHRASES: &[(&str, &str)] = &[
    // Common full sentences
    ("Die folgenden Funktionen sind in der", "The following functions are available in the"),
    ("Bibliothek verfügbar", "library"),
    ("verfügbar", "available"),

    // Headers and common titles
    ("Übersicht", "Overview"),
    ("Verfügbare Funktionen", "Available Functions"),
    ("Grundlegende", "Basic"),
    ("Erweiterte", "Advanced"),
    ("Beispiele", "Examples"),
    ("Verwendung", "Usage"),
    ("Beschreibung", "Description"),
    ("Parameter", "Parameters"),
    ("Rückgabewert", "Return Value"),
    ("Rückgabe", "Returns"),

    // Technical terms
    ("Berechnet", "Calculates"),
    ("Gibt", "Returns"),
    ("zurück", ""),
    ("Prüft", "Checks"),
    ("Konvertiert", "Converts"),
    ("Erstellt", "Creates"),
    ("Liest", "Reads"),
    ("Schreibt", "Writes"),
    ("Findet", "Finds"),
    ("Sucht", "Searches"),
    ("Extrahiert", "Extracts"),
    ("Verkettet", "Concatenates"),
    ("Macht", "Makes"),
    ("Zeigt", "Shows"),
    ("Führt", "Executes"),
    ("Tokenisiert", "Tokenizes"),
    ("Generiert", "Generates"),
    ("Listet", "Lists"),
    ("Lade", "Load"),
    ("Entpacke", "Extract"),
    ("Füge", "Add"),
    ("hinzu", ""),
    ("Nutze", "Use"),
    ("Kopieren", "Copy"),
    ("Ergänze", "Add"),

    // Common phrases
    ("aus den", "from the"),
    ("das passende Archiv", "the appropriate archive"),
    ("den Binärpfad deiner", "the binary path to your"),
    ("Umgebungsvariable", "environment variable"),
    ("die Installation mit", "the installation with"),
    ("Die kompilierten Binaries findest du unter", "You'll find the compiled binaries under"),
    ("Alle Subcommands sind bewusst schlank gehalten", "All subcommands are intentionally kept lean"),
    ("Für einen tieferen Blick sieh dir die folgenden Abschnitte an", "For a deeper look, check out the following sections"),
    ("Weitere Details liefert die Seite", "Further details are provided on the page"),
    ("ohne Ausführung", "without execution"),
    ("Bei Fehlern", "If there are errors"),
    ("aktivieren", "enable"),
    ("verschafft dir einen schnellen Überblick über", "gives you a quick overview of"),
    ("die Standardbibliothek", "the standard library"),

    // Table headers
    ("Befehl", "Command"),
    ("Kurzbeschreibung", "Brief Description"),
    ("Kategorie", "Category"),
    ("Funktionen", "Functions"),
    ("Funktion", "Function"),

    // File/system terms
    ("Dateien", "files"),
    ("Datei", "file"),
    ("Verzeichnisse", "directories"),
    ("Verzeichnis", "directory"),
    ("Ordner", "folder"),

    // Common code comments
    ("Hilfe anzeigen", "Show help"),
    ("Versionshinweis", "Version information"),
    ("Programm ausführen", "Run a program"),
    ("Optional installieren", "Optionally install"),
    ("Type Checking", "Type checking"),
    ("AST prüfen", "Check AST"),
    ("Debug-Ausgabe", "Debug output"),
    ("WASM generieren", "Generate WASM"),

    // Phrases from the example programs
    ("Willkommen bei HypnoScript", "Welcome to HypnoScript"),
    ("Hallo Welt", "Hello World"),
    ("Hallo", "Hello"),
    ("Entwickler", "Developer"),
    ("Summe", "Sum"),
    ("Die Erinnerung wird jetzt intensiver", "The memory is now becoming more intense"),
];

/// Process-wide phrase table built from the built-in pairs
pub static PHRASE_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::from_pairs(BUILTIN_PHRASES));

/// A single literal substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// German fragment to look for
    pub german: String,

    /// English replacement; empty means the fragment is deleted
    pub english: String,
}

impl PhraseEntry {
    /// Create a new entry
    pub fn new(german: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            german: german.into(),
            english: english.into(),
        }
    }
}

/// Ordered list of phrase entries
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    /// Build a table from entries, keeping their order.
    ///
    /// Entries with an empty German key would match between every character,
    /// so they are dropped.
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        let (entries, dropped): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|entry| !entry.german.is_empty());

        if !dropped.is_empty() {
            debug!("Dropped {} phrase entries with an empty source fragment", dropped.len());
        }

        Self { entries }
    }

    /// Build a table from `(german, english)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(german, english)| PhraseEntry::new(*german, *english))
                .collect(),
        )
    }

    /// The built-in table
    pub fn builtin() -> &'static PhraseTable {
        &PHRASE_TABLE
    }

    /// Entries in application order
    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    /// Replace every occurrence of every key, entry by entry in table order.
    ///
    /// Each entry sees the output of the previous one. Deletions leave the
    /// surrounding whitespace as is.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();

        for entry in &self.entries {
            if result.contains(entry.german.as_str()) {
                result = result.replace(entry.german.as_str(), &entry.english);
            }
        }

        result
    }
}
