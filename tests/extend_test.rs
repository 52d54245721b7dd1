use indexmap::IndexMap;
use stencil::extend::{extend_structure, record_custom_contents};
use stencil::store::{FileContents, ProjectStructure};

fn base_structure() -> ProjectStructure {
    let mut structure = ProjectStructure::new();
    structure.insert(
        "{{ project_name }}/src".to_string(),
        vec!["main.py".to_string(), "utils.py".to_string()],
    );
    structure
}

#[test]
fn test_custom_directories_inserted_with_empty_lists() {
    let mut structure = base_structure();
    let dirs = vec!["docs".to_string(), "scripts".to_string()];

    extend_structure(&mut structure, &dirs, &IndexMap::new());

    assert_eq!(structure.get("docs"), Some(&Vec::new()));
    assert_eq!(structure.get("scripts"), Some(&Vec::new()));
    // Appended after the existing keys, in input order
    let keys: Vec<_> = structure.keys().collect();
    assert_eq!(keys, vec!["{{ project_name }}/src", "docs", "scripts"]);
}

#[test]
fn test_existing_directory_not_reset() {
    let mut structure = base_structure();
    let dirs = vec!["{{ project_name }}/src".to_string()];

    extend_structure(&mut structure, &dirs, &IndexMap::new());

    assert_eq!(
        structure.get("{{ project_name }}/src"),
        Some(&vec!["main.py".to_string(), "utils.py".to_string()])
    );
}

#[test]
fn test_custom_file_appended_to_parent_directory() {
    let mut structure = base_structure();
    let mut files = IndexMap::new();
    files.insert("extra/notes.txt".to_string(), "hello".to_string());

    extend_structure(&mut structure, &[], &files);

    assert_eq!(structure.get("extra"), Some(&vec!["notes.txt".to_string()]));
}

#[test]
fn test_custom_file_in_existing_directory() {
    let mut structure = base_structure();
    let mut files = IndexMap::new();
    files.insert("{{ project_name }}/src/cli.py".to_string(), "".to_string());

    extend_structure(&mut structure, &[], &files);

    assert_eq!(
        structure.get("{{ project_name }}/src"),
        Some(&vec![
            "main.py".to_string(),
            "utils.py".to_string(),
            "cli.py".to_string()
        ])
    );
}

#[test]
fn test_no_deduplication() {
    let mut structure = ProjectStructure::new();
    structure.insert("docs".to_string(), vec!["readme.md".to_string()]);
    let mut files = IndexMap::new();
    files.insert("docs/readme.md".to_string(), "again".to_string());

    extend_structure(&mut structure, &[], &files);

    assert_eq!(
        structure.get("docs"),
        Some(&vec!["readme.md".to_string(), "readme.md".to_string()])
    );
}

#[test]
fn test_record_custom_contents() {
    let mut contents = FileContents::new();
    contents.insert("main.py".to_string(), "body".to_string());
    let mut files = IndexMap::new();
    files.insert("extra/notes.txt".to_string(), "hello".to_string());

    record_custom_contents(&mut contents, &files);

    assert_eq!(contents.get("extra/notes.txt"), Some(&"hello".to_string()));
    assert_eq!(contents.get("main.py"), Some(&"body".to_string()));
}
