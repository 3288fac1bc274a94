//! Stroke counts for the catalog characters, used by the terminal
//! widget to pace the demonstration and size the tracing quiz.

const STROKE_COUNTS: &[(&str, usize)] = &[
    // 數字
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 5),
    ("五", 4),
    ("六", 4),
    ("七", 2),
    ("八", 2),
    ("九", 2),
    ("十", 2),
    // 自然
    ("天", 4),
    ("地", 6),
    ("日", 4),
    ("月", 4),
    ("山", 3),
    ("水", 4),
    ("火", 4),
    ("風", 9),
    ("雨", 8),
    ("田", 5),
    // 人體
    ("口", 3),
    ("耳", 6),
    ("目", 5),
    ("手", 4),
    ("足", 7),
    ("心", 4),
    ("大", 3),
    ("小", 3),
    ("長", 8),
    ("短", 12),
    // 生活
    ("工", 3),
    ("人", 2),
    ("王", 4),
    ("力", 2),
    ("又", 2),
    ("寸", 3),
    ("木", 4),
    ("禾", 5),
    ("竹", 6),
    ("米", 6),
];

/// Stroke count for `character`; unknown characters get a middling
/// default so the widget still works.
pub fn stroke_count(character: &str) -> usize {
    STROKE_COUNTS
        .iter()
        .find(|(c, _)| *c == character)
        .map(|(_, n)| *n)
        .unwrap_or(6)
}
