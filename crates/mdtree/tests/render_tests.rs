use insta::assert_snapshot;
use mdtree::{Children, Config, MarkdownTree, Node};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// One directory block as read back from rendered markdown
#[derive(Debug, Default, PartialEq)]
struct Block {
    files: Vec<String>,
    dirs: Vec<(String, Block)>,
}

impl Block {
    /// What the renderer should produce for these children
    fn expected(children: &Children) -> Self {
        let mut block = Block::default();
        for (name, node) in children {
            match node {
                Node::File(label) => block.files.push(label.clone()),
                Node::Directory(grandchildren) => {
                    block.dirs.push((name.clone(), Block::expected(grandchildren)))
                }
            }
        }
        block
    }

    /// Read a block whose headings are at `level`; list lines attach to the
    /// innermost open heading
    fn parse<'a, I>(lines: &mut std::iter::Peekable<I>, level: usize) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let mut block = Block::default();
        while let Some(line) = lines.peek() {
            if let Some(label) = line.strip_prefix("- ") {
                block.files.push(label.to_string());
                lines.next();
                continue;
            }

            let hashes = line.chars().take_while(|&c| c == '#').count();
            if hashes != level {
                break;
            }
            let name = line[hashes + 1..].to_string();
            lines.next();
            let child = Block::parse(lines, level + 1);
            block.dirs.push((name, child));
        }
        block
    }
}

fn scenario_tree(config: Config) -> MarkdownTree {
    let mut tree = MarkdownTree::new("proj", config);
    tree.insert("src/a.go", false);
    tree.insert("src/b.go", false);
    tree.insert("docs/img/x.png", false);
    tree
}

#[test]
fn test_scenario() {
    let tree = scenario_tree(Config::new());
    assert_snapshot!(tree.to_markdown().unwrap(), @r"
# proj
## docs
### img
- x
## src
- a
- b
");
}

#[test]
fn test_scenario_exact_bytes() {
    let tree = scenario_tree(Config::new());
    assert_eq!(
        tree.to_markdown().unwrap(),
        "# proj\n## docs\n### img\n- x\n## src\n- a\n- b\n"
    );
}

#[test]
fn test_link_scenario() {
    let config = Config::new().with_link("https://example.com/docs");
    let mut tree = MarkdownTree::new("proj", config);
    tree.insert("guide", true);
    tree.insert("guide/intro.md", false);
    tree.insert("guide/setup", true);
    tree.insert("guide/setup/install notes.md", false);

    assert_snapshot!(tree.to_markdown().unwrap(), @r"
# proj
## guide
- [intro](https://example.com/docs/guide/intro.md)
### setup
- [install notes](https://example.com/docs/guide/setup/install%20notes.md)
");
}

#[test]
fn test_depth_capped_directory_renders_as_item() {
    let mut tree = MarkdownTree::new("proj", Config::new());
    tree.insert("a/b/c/d/e/f/g/h.txt", false);

    assert_eq!(
        tree.to_markdown().unwrap(),
        "# proj\n## a\n### b\n#### c\n##### d\n###### e\n- f\n"
    );
}

#[test]
fn test_example_directory_renders_as_item() {
    let mut tree = MarkdownTree::new("proj", Config::new());
    tree.insert("demos/grpc-example", true);
    tree.insert("demos/grpc-example/main.go", false);
    tree.insert("demos/basic.rs", false);

    assert_eq!(
        tree.to_markdown().unwrap(),
        "# proj\n## demos\n- basic\n- grpc-example\n"
    );
}

#[test]
fn test_write_markdown_matches_to_markdown() {
    let tree = scenario_tree(Config::new());
    let mut buf = Vec::new();
    tree.write_markdown(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), tree.to_markdown().unwrap());
}

fn inserts() -> impl Strategy<Value = Vec<(String, bool)>> {
    let path = prop::collection::vec("[a-z]{1,4}(\\.[a-z]{1,2})?", 1..9)
        .prop_map(|parts| parts.join("/"));
    prop::collection::vec((path, any::<bool>()), 0..40)
}

proptest! {
    #[test]
    fn prop_render_is_idempotent(entries in inserts()) {
        let mut tree = MarkdownTree::new("proj", Config::new());
        for (path, is_dir) in &entries {
            tree.insert(path, *is_dir);
        }

        prop_assert_eq!(tree.to_markdown().unwrap(), tree.to_markdown().unwrap());
    }

    #[test]
    fn prop_files_precede_subdirectories(entries in inserts()) {
        let mut tree = MarkdownTree::new("proj", Config::new());
        for (path, is_dir) in &entries {
            tree.insert(path, *is_dir);
        }

        let markdown = tree.to_markdown().unwrap();
        let mut lines = markdown.lines().peekable();
        prop_assert_eq!(lines.next(), Some("# proj"));

        let parsed = Block::parse(&mut lines, 2);
        prop_assert_eq!(lines.next(), None);
        prop_assert_eq!(parsed, Block::expected(tree.children()));
    }
}
