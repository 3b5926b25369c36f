//! Context-aware keybindings with string key specs

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Command name -> key specs (`"space"`, `"ctrl+u"`, `"shift+tab"`)
pub type BindingMap = BTreeMap<String, Vec<String>>;

/// A set of keybinding contexts, usually one per focus area
///
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// enum PanelContext { Search, List }
///
/// impl BindingContext for PanelContext {
///     fn name(&self) -> &'static str {
///         match self {
///             PanelContext::Search => "search",
///             PanelContext::List => "list",
///         }
///     }
///     fn from_name(name: &str) -> Option<Self> { /* ... */ }
///     fn all() -> &'static [Self] { &[PanelContext::Search, PanelContext::List] }
/// }
/// ```
pub trait BindingContext: Clone + Copy + Eq + Hash + 'static {
    /// Name used as the config-file key
    fn name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;

    fn all() -> &'static [Self];
}

/// Keybindings split into a global table and one table per context
///
/// Lookups check the active context first and fall back to the global table.
/// Serialized as `{"global": {...}, "<context>": {...}}`.
#[derive(Debug, Clone)]
pub struct Keybindings<C: BindingContext> {
    global: BindingMap,
    contexts: HashMap<C, BindingMap>,
}

impl<C: BindingContext> Default for Keybindings<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext> Serialize for Keybindings<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.contexts.len()))?;
        map.serialize_entry("global", &self.global)?;
        // C::all() gives a stable order for config dumps
        for context in C::all() {
            if let Some(bindings) = self.contexts.get(context) {
                map.serialize_entry(context.name(), bindings)?;
            }
        }
        map.end()
    }
}

impl<'de, C: BindingContext> Deserialize<'de> for Keybindings<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, BindingMap> = HashMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (name, bindings) in raw {
            if name == "global" {
                keybindings.global = bindings;
            } else if let Some(context) = C::from_name(&name) {
                keybindings.contexts.insert(context, bindings);
            } else {
                tracing::debug!(context = %name, "Ignoring unknown keybinding context");
            }
        }
        Ok(keybindings)
    }
}

impl<C: BindingContext> Keybindings<C> {
    pub fn new() -> Self {
        Self {
            global: BindingMap::new(),
            contexts: HashMap::new(),
        }
    }

    pub fn add_global(&mut self, command: impl Into<String>, keys: &[&str]) {
        self.global.insert(command.into(), to_owned_keys(keys));
    }

    pub fn add(&mut self, context: C, command: impl Into<String>, keys: &[&str]) {
        self.contexts
            .entry(context)
            .or_default()
            .insert(command.into(), to_owned_keys(keys));
    }

    pub fn context_bindings(&self, context: C) -> Option<&BindingMap> {
        self.contexts.get(&context)
    }

    pub fn global_bindings(&self) -> &BindingMap {
        &self.global
    }

    /// Command bound to `key` in `context`, falling back to global bindings
    pub fn get_command(&self, key: &KeyEvent, context: C) -> Option<&str> {
        self.contexts
            .get(&context)
            .and_then(|bindings| match_key(key, bindings))
            .or_else(|| match_key(key, &self.global))
    }

    /// First key spec bound to `command`, for help text
    pub fn get_first_keybinding(&self, command: &str, context: C) -> Option<&str> {
        self.contexts
            .get(&context)
            .and_then(|bindings| bindings.get(command))
            .and_then(|keys| keys.first())
            .or_else(|| self.global.get(command).and_then(|keys| keys.first()))
            .map(String::as_str)
    }

    /// Overlay `user` on `defaults`, command by command
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.global.extend(user.global);
        for (context, bindings) in user.contexts {
            defaults.contexts.entry(context).or_default().extend(bindings);
        }
        defaults
    }
}

fn to_owned_keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn match_key<'a>(key: &KeyEvent, bindings: &'a BindingMap) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(_, specs)| {
            specs
                .iter()
                .filter_map(|spec| parse_key_string(spec))
                .any(|parsed| key_matches(&parsed, key))
        })
        .map(|(command, _)| command.as_str())
}

/// Compare code and modifiers only; letters compare case-insensitively
fn key_matches(parsed: &KeyEvent, key: &KeyEvent) -> bool {
    let codes_match = match (parsed.code, key.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    };
    codes_match && parsed.modifiers == key.modifiers
}

/// Parse a key spec such as `"q"`, `"esc"`, `"ctrl+u"`, `"alt+down"`
///
/// Returns `None` for empty or unknown specs.
pub fn parse_key_string(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    if spec.is_empty() {
        return None;
    }

    let (modifier_parts, key_part) = match spec.rsplit_once('+') {
        // "+" on its own or "ctrl++" binds the plus key
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", spec.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => return None,
        },
        c => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Render a key spec for help text: `"ctrl+u"` -> `"^U"`, `"space"` -> `"Space"`
pub fn format_key_for_display(spec: &str) -> String {
    let Some(key) = parse_key_string(spec) else {
        return spec.trim().to_string();
    };

    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push('^');
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }

    let name = match key.code {
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Insert => "Ins".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().collect(),
        other => format!("{:?}", other),
    };
    out.push_str(&name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestContext {
        Search,
        List,
    }

    impl BindingContext for TestContext {
        fn name(&self) -> &'static str {
            match self {
                TestContext::Search => "search",
                TestContext::List => "list",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "search" => Some(TestContext::Search),
                "list" => Some(TestContext::List),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[TestContext::Search, TestContext::List]
        }
    }

    #[test]
    fn test_parse_plain_and_named() {
        assert_eq!(parse_key_string("q").unwrap().code, KeyCode::Char('q'));
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string(" Esc ").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modifiers() {
        let k = parse_key_string("ctrl+u").unwrap();
        assert_eq!(k.code, KeyCode::Char('u'));
        assert_eq!(k.modifiers, KeyModifiers::CONTROL);

        let k = parse_key_string("alt+down").unwrap();
        assert_eq!(k.code, KeyCode::Down);
        assert_eq!(k.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_backtab_forms() {
        for spec in ["shift+tab", "backtab"] {
            let k = parse_key_string(spec).unwrap();
            assert_eq!(k.code, KeyCode::BackTab);
            assert_eq!(k.modifiers, KeyModifiers::SHIFT);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+x").is_none());
        assert!(parse_key_string("f13").is_none());
        assert!(parse_key_string("nope").is_none());
    }

    #[test]
    fn test_get_command_context_then_global() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("search.focus", &["tab"]);
        bindings.add(TestContext::List, "row.toggle", &["space", "enter"]);
        bindings.add(TestContext::Search, "row.toggle", &["enter"]);

        let space = parse_key_string("space").unwrap();
        assert_eq!(
            bindings.get_command(&space, TestContext::List),
            Some("row.toggle")
        );
        assert_eq!(bindings.get_command(&space, TestContext::Search), None);

        let tab = parse_key_string("tab").unwrap();
        assert_eq!(
            bindings.get_command(&tab, TestContext::Search),
            Some("search.focus")
        );
    }

    #[test]
    fn test_letters_match_case_insensitively() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("quit", &["q"]);

        let upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::NONE);
        assert_eq!(bindings.get_command(&upper, TestContext::List), Some("quit"));
    }

    #[test]
    fn test_first_keybinding() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("search.focus", &["tab", "shift+tab"]);
        bindings.add(TestContext::List, "row.toggle", &["space", "enter"]);

        assert_eq!(
            bindings.get_first_keybinding("row.toggle", TestContext::List),
            Some("space")
        );
        assert_eq!(
            bindings.get_first_keybinding("search.focus", TestContext::List),
            Some("tab")
        );
        assert_eq!(
            bindings.get_first_keybinding("row.toggle", TestContext::Search),
            None
        );
    }

    #[test]
    fn test_merge_overrides_per_command() {
        let mut defaults: Keybindings<TestContext> = Keybindings::new();
        defaults.add(TestContext::List, "row.toggle", &["space"]);
        defaults.add(TestContext::Search, "search.clear", &["esc"]);

        let mut user: Keybindings<TestContext> = Keybindings::new();
        user.add(TestContext::List, "row.toggle", &["x"]);

        let merged = Keybindings::merge(defaults, user);
        assert_eq!(
            merged.context_bindings(TestContext::List).unwrap()["row.toggle"],
            vec!["x".to_string()]
        );
        assert!(merged
            .context_bindings(TestContext::Search)
            .unwrap()
            .contains_key("search.clear"));
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{
            "global": {"search.focus": ["tab"]},
            "list": {"row.toggle": ["space"]},
            "bogus": {"x": ["y"]}
        }"#;
        let bindings: Keybindings<TestContext> = serde_json::from_str(json).unwrap();
        assert!(bindings.global_bindings().contains_key("search.focus"));
        assert!(bindings.context_bindings(TestContext::List).is_some());
        assert!(bindings.context_bindings(TestContext::Search).is_none());

        let value = serde_json::to_value(&bindings).unwrap();
        assert_eq!(value["list"]["row.toggle"][0], "space");
        assert!(value.get("bogus").is_none());
    }

    #[test]
    fn test_serialized_contexts_follow_declared_order() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add(TestContext::List, "row.toggle", &["space"]);
        bindings.add(TestContext::Search, "search.clear", &["esc"]);
        bindings.add_global("search.focus", &["tab"]);

        let json = serde_json::to_string(&bindings).unwrap();
        let global = json.find("\"global\"").unwrap();
        let search = json.find("\"search\"").unwrap();
        let list = json.find("\"list\"").unwrap();
        assert!(global < search && search < list, "{}", json);
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("space"), "Space");
        assert_eq!(format_key_for_display("ctrl+u"), "^U");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("q"), "Q");
    }
}
