//! Static emoticon catalog.
//!
//! The catalog is a compile-time table of categories in display order. Each
//! category holds its emoticons in display order; the same glyph may appear
//! in more than one category.

/// A named group of emoticons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Display name of the category.
    pub name: &'static str,
    /// Emoticons in display order.
    pub emoticons: &'static [&'static str],
}

impl Category {
    const fn new(name: &'static str, emoticons: &'static [&'static str]) -> Self {
        Self { name, emoticons }
    }
}

/// The full emoticon catalog in display order.
pub const CATALOG: &[Category] = &[
    Category::new(
        "Happy",
        &[
            "😀", "😃", "😄", "😁", "😆", "😊", "😇", "🙂", "🙃", "😉", "😌", "😍", "🥰", "😘",
        ],
    ),
    Category::new(
        "Sad",
        &["😢", "😭", "😿", "😔", "😞", "😟", "😥", "😰", "😨", "😧", "😦"],
    ),
    Category::new("Angry", &["😠", "😡", "🤬", "😤", "😾", "💢"]),
    Category::new("Surprised", &["😮", "😯", "😲", "😳", "🤯"]),
    Category::new(
        "Love",
        &["❤️", "💕", "💖", "💗", "💓", "💞", "💝", "💘", "💟", "♥️"],
    ),
    Category::new(
        "Gestures",
        &[
            "👍", "👎", "👌", "✌️", "🤞", "🤘", "🤙", "👏", "🙌", "👐", "🤲", "🤝", "🙏",
        ],
    ),
    Category::new(
        "Faces",
        &[
            "😐", "😑", "😶", "🙄", "😏", "😣", "😥", "😮", "🤐", "😯", "😪", "😫", "🥱", "😴",
        ],
    ),
    Category::new(
        "Cool",
        &["😎", "🤓", "🧐", "😺", "😸", "😹", "😻", "😼", "😽", "🙀"],
    ),
    Category::new(
        "Symbols",
        &["⭐", "✨", "🌟", "💫", "🔥", "💥", "💦", "💨", "✅", "❌", "⚡", "🌈"],
    ),
    Category::new(
        "Objects",
        &["🎉", "🎊", "🎈", "🎁", "🏆", "🥇", "🥈", "🥉", "🏅", "🎖️"],
    ),
    Category::new(
        "Animals",
        &[
            "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸",
            "🐵",
        ],
    ),
    Category::new(
        "Food",
        &[
            "🍕", "🍔", "🍟", "🌭", "🍿", "🧂", "🍰", "🎂", "🍩", "🍪", "🍫", "🍬", "🍭", "☕",
            "🍵",
        ],
    ),
    Category::new(
        "Classic",
        &[
            ":-)",
            ":)",
            ":(",
            ":-(",
            ";-)",
            ";)",
            ":-D",
            ":D",
            ":-P",
            ":P",
            ":-O",
            ":O",
            ":-|",
            ":|",
            "<3",
            "</3",
            ":*",
            ":-*",
            "^_^",
            "^.^",
            "o_o",
            "O_O",
            "T_T",
            "ToT",
            ">_<",
            "-_-",
            r"¯\_(ツ)_/¯",
            "(╯°□°）╯︵ ┻━┻",
            "(ಠ_ಠ)",
            "(◕‿◕)",
            "(づ｡◕‿‿◕｡)づ",
            "ʕ•ᴥ•ʔ",
        ],
    ),
];

/// All categories in display order.
pub fn categories() -> &'static [Category] {
    CATALOG
}

/// Look up a category by exact name.
pub fn category(name: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Whether any category contains the given emoticon.
pub fn contains(emoticon: &str) -> bool {
    CATALOG.iter().any(|c| c.emoticons.contains(&emoticon))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 13] = [
        "Happy", "Sad", "Angry", "Surprised", "Love", "Gestures", "Faces", "Cool", "Symbols",
        "Objects", "Animals", "Food", "Classic",
    ];

    #[test]
    fn test_all_categories_present() {
        for name in REQUIRED {
            assert!(category(name).is_some(), "Category '{}' is missing", name);
        }
    }

    #[test]
    fn test_categories_keep_display_order() {
        let names: Vec<&str> = categories().iter().map(|c| c.name).collect();
        assert_eq!(names, REQUIRED);
    }

    #[test]
    fn test_categories_not_empty() {
        for c in categories() {
            assert!(!c.emoticons.is_empty(), "Category '{}' has no emoticons", c.name);
            for e in c.emoticons {
                assert!(!e.is_empty(), "Empty emoticon in '{}'", c.name);
            }
        }
    }

    #[test]
    fn test_classic_emoticons() {
        let classic = category("Classic").unwrap();
        assert!(classic.emoticons.contains(&":-)"));
        assert!(classic.emoticons.contains(&":)"));
        assert!(classic.emoticons.contains(&"<3"));
        assert!(classic.emoticons.contains(&r"¯\_(ツ)_/¯"));
    }

    #[test]
    fn test_duplicates_across_categories_are_kept() {
        // 😥 is both Sad and Faces
        let sad = category("Sad").unwrap();
        let faces = category("Faces").unwrap();
        assert!(sad.emoticons.contains(&"😥"));
        assert!(faces.emoticons.contains(&"😥"));
    }

    #[test]
    fn test_contains() {
        assert!(contains("<3"));
        assert!(contains("🐶"));
        assert!(!contains("not-an-emoticon"));
    }
}
