use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

// Side effects and time sources belong to features; widgets only render
// props and emit their own event contract.
const FORBIDDEN_PATTERNS: [&str; 9] = [
    "crate::app::Event",
    "log::",
    "std::fs::",
    "std::process::Command",
    "tokio::spawn",
    "Task::",
    "iced::Task",
    "Instant::now",
    ".elapsed(",
];

const FEATURE_INTERNAL_SEGMENTS: [&str; 5] =
    ["::event::", "::state::", "::model::", "::storage::", "::errors::"];

#[test]
fn given_ui_widgets_when_validating_conventions_then_all_modules_comply() {
    let widgets_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/ui/widgets");
    let mut violations: Vec<String> = Vec::new();

    let declared = declared_modules(&widgets_dir, &mut violations);
    let on_disk = modules_on_disk(&widgets_dir, &mut violations);
    if declared != on_disk {
        violations.push(format!(
            "mod.rs declares {declared:?} but the directory holds {on_disk:?}"
        ));
    }

    for module in &declared {
        check_widget_file(&widgets_dir.join(format!("{module}.rs")), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

/// mod.rs may only hold flat `pub(crate) mod <name>;` declarations.
fn declared_modules(
    widgets_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_rs = widgets_dir.join("mod.rs");
    let file = parse_source(&mod_rs);
    let mut declared = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis)
                    && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            }
            other => violations.push(format!(
                "{}: unexpected item {:?}; only pub(crate) mod lines belong here",
                mod_rs.display(),
                item_kind(other)
            )),
        }
    }

    declared
}

fn modules_on_disk(
    widgets_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mut modules = BTreeSet::new();

    let entries = fs::read_dir(widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let path = entry.expect("directory entry should be readable").path();

        if path.is_dir() {
            violations.push(format!(
                "{}: widget layout is flat, nested directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        if stem != "mod" {
            modules.insert(stem);
        }
    }

    modules
}

fn check_widget_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });

    for pattern in FORBIDDEN_PATTERNS {
        if source.contains(pattern) {
            violations.push(format!(
                "{}: forbidden pattern in a widget: {pattern}",
                file_path.display()
            ));
        }
    }

    for line in source.lines() {
        if line.contains("crate::features::")
            && FEATURE_INTERNAL_SEGMENTS
                .iter()
                .any(|segment| line.contains(segment))
        {
            violations.push(format!(
                "{}: widgets may only use feature root re-exports: {line}",
                file_path.display()
            ));
        }
    }

    let prefix = pascal_case_stem(file_path);
    let mut view_fns = 0usize;
    let mut props_types: Vec<String> = Vec::new();
    let mut event_types: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_fns += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            }
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_types.push(name);
                }
            }
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_types.push(name);
                }
            }
            Item::Use(item_use) => {
                if has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard imports are forbidden",
                        file_path.display()
                    ));
                }
            }
            _ => {}
        }
    }

    if view_fns != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_fns}",
            file_path.display()
        ));
    }
    if props_types.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props struct, found {}",
            file_path.display(),
            props_types.len()
        ));
    }
    if event_types.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Event enum, found {}",
            file_path.display(),
            event_types.len()
        ));
    }

    for name in props_types.iter().chain(event_types.iter()) {
        if !name.starts_with(&prefix) {
            violations.push(format!(
                "{}: '{name}' must carry the file prefix '{prefix}'",
                file_path.display()
            ));
        }
    }
}

fn parse_source(path: &Path) -> syn::File {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    syn::parse_file(&source)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn item_kind(item: &Item) -> &'static str {
    match item {
        Item::Mod(_) => "mod",
        Item::Use(_) => "use",
        Item::Fn(_) => "fn",
        Item::Struct(_) => "struct",
        Item::Enum(_) => "enum",
        _ => "item",
    }
}

fn pascal_case_stem(file_path: &Path) -> String {
    file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str()
                }
                None => String::new(),
            }
        })
        .collect()
}

fn has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(has_glob),
        UseTree::Path(path) => has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        }
        _ => false,
    }
}
