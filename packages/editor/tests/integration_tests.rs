//! Integration tests for the editor crate

use anyhow::Result;
use folio_document::{
    Element, ElementKind, Page, PageKind, Project, Rect, SequentialIds, PAGE_WIDTH,
};
use folio_editor::{
    derive_structure, render_pages, Alignment, Editor, EditorConfig, EditorError, ElementPatch,
    GeneratedContent, GeneratedKind, History, KeyEvent, Mode, PointerEvent, PointerTarget,
};
use std::collections::HashSet;

fn page(id: &str, kind: PageKind, elements: Vec<Element>) -> Page {
    Page::new(id, kind).with_elements(elements)
}

fn shape(id: &str, x: f64, y: f64) -> Element {
    Element::new(id, ElementKind::Shape, Rect::new(x, y, 80.0, 60.0))
}

fn editor(pages: Vec<Page>) -> Result<Editor> {
    let project = Project::new("project-1", "Integration", pages);
    Ok(Editor::with_ids(
        project,
        EditorConfig::default(),
        Box::new(SequentialIds::new("integration")),
    )?)
}

fn all_ids(editor: &Editor) -> Vec<String> {
    editor
        .pages()
        .iter()
        .flat_map(|page| page.element_ids().cloned())
        .collect()
}

fn select(editor: &mut Editor, ids: &[&str]) {
    for (i, id) in ids.iter().enumerate() {
        let target = PointerTarget::Element(id.to_string());
        let event = if i == 0 {
            PointerEvent::down(target, 0.0, 0.0)
        } else {
            PointerEvent::shift_down(target, 0.0, 0.0)
        };
        editor.pointer(event);
        editor.pointer(PointerEvent::up(0.0, 0.0));
    }
}

#[test]
fn test_sequence_title_drag_keeps_left_edge() -> Result<()> {
    let title = Element::new(
        "seq",
        ElementKind::SequenceTitle,
        Rect::new(0.0, 0.0, PAGE_WIDTH, 150.0),
    );
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![title])])?;

    editor.pointer(PointerEvent::down(PointerTarget::Element("seq".into()), 0.0, 0.0));
    editor.pointer(PointerEvent::moved(300.0, 300.0));
    editor.pointer(PointerEvent::up(300.0, 300.0));

    let committed = editor.to_project();
    let seq = committed.pages[0].element("seq").expect("title kept");
    assert_eq!((seq.x, seq.y), (0.0, 300.0));
    Ok(())
}

#[test]
fn test_distribute_vertical_skips_resolution() -> Result<()> {
    let mut editor = editor(vec![page(
        "p",
        PageKind::Standard,
        vec![
            shape("top", 0.0, 10.0),
            shape("middle", 0.0, 200.0),
            shape("bottom", 0.0, 400.0),
        ],
    )])?;
    select(&mut editor, &["top", "middle", "bottom"]);
    assert_eq!(editor.selection().len(), 3);

    assert!(editor.align(Alignment::DistributeVertical));

    let page = editor.current_page().expect("page shown");
    let y = |id: &str| page.element(id).map(|el| el.y);
    assert_eq!(y("top"), Some(10.0));
    assert_eq!(y("middle"), Some(205.0));
    assert_eq!(y("bottom"), Some(400.0));
    assert_eq!(editor.history().undo_label(), Some("Align"));
    Ok(())
}

#[test]
fn test_history_keeps_most_recent_fifty() {
    let state = |n: usize| vec![Page::new(format!("p{n}"), PageKind::Standard)];
    let mut history = History::new(state(1));
    for n in 2..=51 {
        history.commit(state(n), None);
    }
    assert_eq!(history.len(), 50);

    while history.undo().is_some() {}
    assert_eq!(history.current()[0].id, "p2");
}

#[test]
fn test_undo_then_redo_restores_exact_state() -> Result<()> {
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![shape("a", 0.0, 0.0)])])?;

    editor.add_element(ElementKind::Text, "hello")?;
    editor.add_page()?;
    editor.toggle_structure(PageKind::Summary)?;
    let after = editor.pages().to_vec();

    let mut undone = 0;
    while editor.undo() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(editor.pages().len(), 1);

    while editor.redo() {}
    assert_eq!(editor.pages(), after.as_slice());
    Ok(())
}

#[test]
fn test_fresh_ids_after_duplicate_and_paste() -> Result<()> {
    let mut editor = editor(vec![page(
        "p",
        PageKind::Standard,
        vec![shape("a", 0.0, 0.0), shape("b", 200.0, 0.0)],
    )])?;

    select(&mut editor, &["a", "b"]);
    assert!(editor.key(KeyEvent::shortcut('c'))?);
    assert!(editor.key(KeyEvent::shortcut('v'))?);
    assert!(editor.key(KeyEvent::shortcut('v'))?);
    editor.duplicate_page("p")?;

    let ids = all_ids(&editor);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(ids.len(), 12);
    assert_eq!(unique.len(), ids.len());

    let page_ids: HashSet<&str> = editor.pages().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(page_ids.len(), 2);
    Ok(())
}

#[test]
fn test_numbering_is_deterministic_and_follows_edits() -> Result<()> {
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![])])?;
    editor.add_element(ElementKind::SequenceTitle, "Intro")?;
    editor.add_element(ElementKind::PartTitle, "First")?;
    editor.add_element(ElementKind::PartTitle, "Second")?;

    let first = editor.structure();
    assert_eq!(first, derive_structure(editor.pages()));
    let labels: Vec<&str> = first.toc.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["SÉQUENCE 1", "1.1", "1.2"]);

    // Swap the two parts vertically; labels follow reading order.
    let ids: Vec<String> = first.toc.iter().map(|e| e.id.clone()).collect();
    let (part_a, part_b) = (&ids[1], &ids[2]);
    let page = editor.current_page().expect("page shown");
    let (ya, yb) = (
        page.element(part_a).map(|el| el.y).unwrap_or_default(),
        page.element(part_b).map(|el| el.y).unwrap_or_default(),
    );
    editor.update_element(
        part_a,
        ElementPatch {
            y: Some(yb + 500.0),
            ..Default::default()
        },
    )?;
    assert!(ya < yb);

    let second = editor.structure();
    assert_eq!(second.label(part_b), Some("1.1"));
    assert_eq!(second.label(part_a), Some("1.2"));
    Ok(())
}

#[test]
fn test_invalid_load_keeps_document() -> Result<()> {
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![shape("a", 0.0, 0.0)])])?;
    select(&mut editor, &["a"]);
    let before = editor.pages().to_vec();
    let history_len = editor.history().len();

    for source in [
        "not json",
        r#"{"id":"x","name":"x"}"#,
        r#"{"pages":[]}"#,
        r#"{"pages":[{"id":"c1","type":"cover"},{"id":"c2","type":"cover"}]}"#,
        r#"{"pages":[{"id":"x","type":"standard"},{"id":"x","type":"standard"}]}"#,
    ] {
        assert!(matches!(
            editor.load_project(source),
            Err(EditorError::Document(_))
        ));
    }

    assert_eq!(editor.pages(), before.as_slice());
    assert_eq!(editor.history().len(), history_len);
    assert!(editor.is_selected("a"));
    Ok(())
}

#[test]
fn test_load_is_undoable() -> Result<()> {
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![])])?;
    let other = Project::new(
        "project-2",
        "Other",
        vec![page("q1", PageKind::Cover, vec![]), page("q2", PageKind::Standard, vec![])],
    );

    editor.load_project(&other.to_json()?)?;
    assert_eq!(editor.current_page_id(), "q1");
    assert_eq!(editor.pages().len(), 2);

    assert!(editor.undo());
    assert_eq!(editor.pages()[0].id, "p");
    assert_eq!(editor.current_page_id(), "p");
    Ok(())
}

#[test]
fn test_generated_cover_and_views() -> Result<()> {
    let mut editor = Editor::starter_with_ids(
        EditorConfig::default(),
        Box::new(SequentialIds::new("generated")),
    );
    let cover_id = editor.pages()[0].id.clone();
    editor.apply_generated(&GeneratedContent::new(GeneratedKind::Cover, "<h1>Title</h1>"))?;

    let cover = &editor.pages()[0];
    assert_eq!(cover.id, cover_id);
    let html = cover.elements.last().expect("cover markup added");
    assert_eq!(html.kind, ElementKind::Html);
    assert_eq!(html.content, "<h1>Title</h1>");

    let structure = editor.structure();
    let views = render_pages(editor.pages(), &structure);
    assert_eq!(views.len(), editor.pages().len());
    assert_eq!(views[0].page_number, None);
    assert_eq!(views[3].page_number, Some(1));
    Ok(())
}

#[test]
fn test_drag_commits_once() -> Result<()> {
    let mut editor = editor(vec![page("p", PageKind::Standard, vec![shape("a", 0.0, 0.0)])])?;
    let before = editor.history().len();

    editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 0.0, 0.0));
    for step in 1..=10 {
        editor.pointer(PointerEvent::moved(step as f64 * 10.0, step as f64 * 10.0));
    }
    assert_eq!(editor.mode(), Mode::Dragging);
    editor.pointer(PointerEvent::up(100.0, 100.0));

    assert_eq!(editor.history().len(), before + 1);
    assert!(editor.undo());
    let a = editor.current_page().and_then(|p| p.element("a")).map(|el| (el.x, el.y));
    assert_eq!(a, Some((0.0, 0.0)));
    Ok(())
}

#[test]
fn test_demo_workbook_numbers_its_titles() -> Result<()> {
    let project = Project::demo(&mut SequentialIds::new("demo"));
    let editor = Editor::with_ids(
        project,
        EditorConfig::default(),
        Box::new(SequentialIds::new("integration")),
    )?;

    let structure = editor.structure();
    let labels: Vec<&str> = structure.toc.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["SÉQUENCE 1", "1.1", "1.2", "1.3", "1.4", "1.5", "1.6"]
    );
    let pages: Vec<usize> = structure.toc.iter().map(|entry| entry.page_num).collect();
    assert_eq!(pages, vec![1, 1, 2, 3, 4, 5, 6]);
    assert_eq!(structure.toc[0].title, "L'Énergie et ses Formes");
    Ok(())
}
