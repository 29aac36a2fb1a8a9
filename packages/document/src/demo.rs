//! Sample workbook showing every element family on a full page sequence.

use crate::element::{Element, ElementKind};
use crate::geometry::{Rect, PAGE_HEIGHT, PAGE_WIDTH};
use crate::ids::IdSource;
use crate::page::{BackgroundPattern, Page, PageKind};
use crate::project::Project;
use crate::style::{ElementStyle, TextAlign};

const COVER_HTML: &str = "<style>body{margin:0;height:100%;display:flex;flex-direction:column;\
align-items:center;justify-content:center;font-family:'Inter',sans-serif;color:#1e293b}\
h1{font-size:56px;color:#4f46e5;margin:0}</style>\
<h1>Manuel Démo</h1><h2>Sciences &amp; Technologie</h2><p>CYCLE 4</p>";

const DEFINITION_HTML: &str = "<style>.def-box{background:#f0f9ff;border-left:4px solid #0ea5e9;\
padding:15px;font-family:sans-serif;border-radius:8px}</style>\
<div class=\"def-box\"><strong>Définition :</strong> l'énergie se mesure en joules (J).</div>";

const WATER_CYCLE_SVG: &str = "<svg viewBox=\"0 0 200 150\" xmlns=\"http://www.w3.org/2000/svg\">\
<rect width=\"200\" height=\"150\" fill=\"#e0f2fe\"/><circle cx=\"170\" cy=\"30\" r=\"15\" fill=\"#facc15\"/>\
<path d=\"M0 120 Q50 100 100 120 T200 120 V150 H0 Z\" fill=\"#0ea5e9\"/></svg>";

const QUIZ_JSON: &str = r#"[{"question":"Quelle est l'unité de l'énergie ?","options":["Le watt","Le joule","Le newton"],"answer":1},{"question":"Une éolienne convertit l'énergie...","options":["cinétique","chimique","nucléaire"],"answer":0},{"question":"L'énergie totale d'un système isolé...","options":["augmente","diminue","se conserve"],"answer":2}]"#;

const TRUE_FALSE_HTML: &str = "<div class=\"tf-item\">Le soleil est une source renouvelable. \
<span>Vrai / Faux</span></div><div class=\"tf-item\">Le charbon est inépuisable. <span>Vrai / Faux</span></div>";

const FILL_BLANKS_HTML: &str = "<p>L'énergie se <input/> mais ne se perd pas : elle se \
<input/> d'une forme à une autre.</p>";

const PYRAMID_STL: &str = "solid pyramid
facet normal 0 0 -1
outer loop
vertex 0 0 0
vertex 10 0 0
vertex 0 10 0
endloop
endfacet
facet normal 0.7 0.7 0.7
outer loop
vertex 0 0 0
vertex 0 10 0
vertex 5 5 10
endloop
endfacet
endsolid pyramid";

const MIND_MAP_HTML: &str = "<div class=\"center\">Énergie</div><div>Solaire</div>\
<div>Éolienne</div><div>Hydraulique</div><div>Fossile</div>";

const TIMELINE_HTML: &str = "<div class=\"tl\"><div class=\"tl-item\">1769 : machine à vapeur</div>\
<div class=\"tl-item\">1882 : première centrale électrique</div>\
<div class=\"tl-item\">1954 : première centrale nucléaire</div></div>";

const MATCHING_HTML: &str = "<div class=\"match-container\"><div class=\"col\"><div>Pile</div>\
<div>Barrage</div></div><div class=\"col\"><div>Énergie chimique</div><div>Énergie potentielle</div></div></div>";

const DOTS_JSON: &str = r#"[{"x":20,"y":80},{"x":50,"y":20},{"x":80,"y":80},{"x":20,"y":80}]"#;

const FLASHCARDS_HTML: &str = "<div class=\"card\"><div class=\"front\">Joule</div>\
<div class=\"back\">Unité de l'énergie</div></div>";

const MINI_APP_HTML: &str = "<style>body{margin:0;display:flex;flex-direction:column;align-items:center;\
justify-content:center;height:100%;font-family:sans-serif;background:#1e293b;color:white}</style>\
<h2 id=\"count\">0</h2><button onclick=\"count.textContent=+count.textContent+1\">+1</button>";

/// Builds elements for one page, stacking each above the previous.
struct PageBuilder<'a> {
    ids: &'a mut dyn IdSource,
    elements: Vec<Element>,
}

impl<'a> PageBuilder<'a> {
    fn new(ids: &'a mut dyn IdSource) -> Self {
        Self {
            ids,
            elements: Vec::new(),
        }
    }

    fn add(
        &mut self,
        kind: ElementKind,
        rect: Rect,
        content: &str,
        style: ElementStyle,
    ) -> &mut Self {
        let style = ElementStyle {
            z_index: self.elements.len() as i64 + 1,
            ..style
        };
        self.elements.push(
            Element::new(self.ids.next_id(), kind, rect)
                .with_content(content)
                .with_style(style),
        );
        self
    }

    fn plain(&mut self, kind: ElementKind, rect: Rect, content: &str) -> &mut Self {
        self.add(kind, rect, content, ElementStyle::default())
    }

    fn part(&mut self, title: &str, accent: &str) -> &mut Self {
        self.add(
            ElementKind::PartTitle,
            Rect::new(40.0, 40.0, 500.0, 60.0),
            title,
            ElementStyle {
                border_color: Some(accent.to_string()),
                ..Default::default()
            },
        )
    }

    fn finish(&mut self) -> Vec<Element> {
        std::mem::take(&mut self.elements)
    }
}

fn framed(background: &str, radius: f64) -> ElementStyle {
    ElementStyle {
        background_color: Some(background.to_string()),
        border_radius: Some(radius),
        ..Default::default()
    }
}

fn standard(id: String, background_color: &str, elements: Vec<Element>) -> Page {
    let mut page = Page::new(id, PageKind::Standard).with_elements(elements);
    page.background_color = Some(background_color.to_string());
    page
}

impl Project {
    /// Demonstration workbook: cover, flyleaf, summary, six content pages
    /// under one sequence, and a back cover.
    pub fn demo(ids: &mut dyn IdSource) -> Self {
        let mut pages = Vec::with_capacity(10);

        let cover_id = ids.next_id();
        let cover = PageBuilder::new(ids)
            .plain(
                ElementKind::Html,
                Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT),
                COVER_HTML,
            )
            .finish();
        pages.push(Page::new(cover_id, PageKind::Cover).with_elements(cover));

        pages.push(Page::new(ids.next_id(), PageKind::Flyleaf));
        pages.push(Page::summary(ids.next_id(), ids.next_id()));

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .add(
                ElementKind::SequenceTitle,
                Rect::new(0.0, 40.0, PAGE_WIDTH, 160.0),
                "L'Énergie et ses Formes",
                ElementStyle {
                    background_color: Some("#0ea5e9".to_string()),
                    color: Some("#fff".to_string()),
                    ..Default::default()
                },
            )
            .add(
                ElementKind::PartTitle,
                Rect::new(40.0, 240.0, 500.0, 60.0),
                "Définitions Fondamentales",
                ElementStyle {
                    border_color: Some("#0ea5e9".to_string()),
                    ..Default::default()
                },
            )
            .plain(
                ElementKind::Text,
                Rect::new(40.0, 320.0, 700.0, 120.0),
                "L'énergie est une grandeur physique qui caractérise l'état d'un système \
                 et qui est globalement conservée au cours des transformations.",
            )
            .plain(ElementKind::Html, Rect::new(40.0, 460.0, 700.0, 140.0), DEFINITION_HTML)
            .add(
                ElementKind::H3Title,
                Rect::new(40.0, 640.0, 400.0, 40.0),
                "Écoutez la leçon",
                ElementStyle {
                    color: Some("#0369a1".to_string()),
                    ..Default::default()
                },
            )
            .add(
                ElementKind::Audio,
                Rect::new(40.0, 700.0, 350.0, 70.0),
                "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav",
                framed("transparent", 12.0),
            )
            .finish();
        let mut lesson = Page::new(id, PageKind::Standard).with_elements(elements);
        lesson.background = Some(BackgroundPattern::Lines);
        pages.push(lesson);

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .part("Illustrations & Schémas", "#8b5cf6")
            .plain(
                ElementKind::H4Title,
                Rect::new(40.0, 120.0, 300.0, 40.0),
                "Le Cycle de l'Eau (SVG)",
            )
            .plain(ElementKind::Svg, Rect::new(40.0, 170.0, 340.0, 250.0), WATER_CYCLE_SVG)
            .plain(ElementKind::H4Title, Rect::new(400.0, 120.0, 300.0, 40.0), "Vidéo Explicative")
            .add(ElementKind::Shape, Rect::new(400.0, 170.0, 350.0, 200.0), "", framed("#000", 8.0))
            .add(
                ElementKind::Text,
                Rect::new(410.0, 250.0, 330.0, 40.0),
                "Video Placeholder",
                ElementStyle {
                    color: Some("white".to_string()),
                    text_align: Some(TextAlign::Center),
                    ..Default::default()
                },
            )
            .plain(
                ElementKind::QrCode,
                Rect::new(600.0, 400.0, 150.0, 150.0),
                "https://edu.google.com",
            )
            .add(
                ElementKind::Text,
                Rect::new(600.0, 560.0, 150.0, 30.0),
                "Scannez pour +",
                ElementStyle {
                    font_size: Some(10.0),
                    text_align: Some(TextAlign::Center),
                    color: Some("#64748b".to_string()),
                    ..Default::default()
                },
            )
            .finish();
        pages.push(standard(id, "#fff", elements));

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .part("Exercices Interactifs", "#16a34a")
            .plain(ElementKind::H4Title, Rect::new(40.0, 120.0, 300.0, 40.0), "QCM")
            .plain(ElementKind::Quiz, Rect::new(40.0, 170.0, 340.0, 350.0), QUIZ_JSON)
            .plain(ElementKind::H4Title, Rect::new(400.0, 120.0, 300.0, 40.0), "Vrai / Faux")
            .add(
                ElementKind::TrueFalse,
                Rect::new(400.0, 170.0, 350.0, 200.0),
                TRUE_FALSE_HTML,
                framed("white", 12.0),
            )
            .plain(ElementKind::H4Title, Rect::new(400.0, 400.0, 300.0, 40.0), "Texte à Trous")
            .add(
                ElementKind::FillInTheBlanks,
                Rect::new(400.0, 450.0, 350.0, 150.0),
                FILL_BLANKS_HTML,
                framed("white", 12.0),
            )
            .finish();
        pages.push(standard(id, "#f8fafc", elements));

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .part("Modélisation & Synthèse", "#ea580c")
            .plain(ElementKind::H4Title, Rect::new(40.0, 120.0, 300.0, 40.0), "Modèle 3D (STL)")
            .add(
                ElementKind::ThreeDModel,
                Rect::new(40.0, 170.0, 340.0, 300.0),
                PYRAMID_STL,
                framed("#f1f5f9", 12.0),
            )
            .plain(ElementKind::H4Title, Rect::new(400.0, 120.0, 300.0, 40.0), "Carte Mentale")
            .add(
                ElementKind::MindMap,
                Rect::new(400.0, 170.0, 350.0, 250.0),
                MIND_MAP_HTML,
                framed("white", 12.0),
            )
            .plain(
                ElementKind::H4Title,
                Rect::new(400.0, 440.0, 300.0, 40.0),
                "Frise Chronologique",
            )
            .plain(ElementKind::Timeline, Rect::new(400.0, 490.0, 350.0, 200.0), TIMELINE_HTML)
            .finish();
        pages.push(standard(id, "#fff", elements));

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .part("Jeux & Révisions", "#db2777")
            .plain(ElementKind::H4Title, Rect::new(40.0, 120.0, 300.0, 40.0), "Appariement")
            .add(
                ElementKind::Matching,
                Rect::new(40.0, 170.0, 340.0, 180.0),
                MATCHING_HTML,
                framed("white", 8.0),
            )
            .plain(ElementKind::H4Title, Rect::new(40.0, 380.0, 300.0, 40.0), "Points à Relier")
            .add(
                ElementKind::ConnectDots,
                Rect::new(40.0, 430.0, 340.0, 340.0),
                DOTS_JSON,
                framed("white", 12.0),
            )
            .plain(ElementKind::H4Title, Rect::new(400.0, 120.0, 300.0, 40.0), "Flashcards")
            .plain(ElementKind::Flashcards, Rect::new(400.0, 170.0, 350.0, 200.0), FLASHCARDS_HTML)
            .finish();
        pages.push(standard(id, "#f0fdf4", elements));

        let id = ids.next_id();
        let elements = PageBuilder::new(ids)
            .part("Laboratoire Interactif", "#6366f1")
            .plain(
                ElementKind::Text,
                Rect::new(40.0, 120.0, 700.0, 60.0),
                "Cette page intègre une mini application : un compteur interactif \
                 codé en HTML et encapsulé dans la page.",
            )
            .add(
                ElementKind::Html,
                Rect::new(200.0, 200.0, 400.0, 300.0),
                MINI_APP_HTML,
                ElementStyle {
                    border_radius: Some(16.0),
                    box_shadow: Some("0 10px 20px rgba(0,0,0,0.2)".to_string()),
                    ..Default::default()
                },
            )
            .finish();
        pages.push(standard(id, "#fff", elements));

        pages.push(Page::new(ids.next_id(), PageKind::BackCover));

        Self::new(ids.next_id(), "Manuel Démo", pages)
    }
}
