//! Page layout for one order.
//!
//! All positions are millimetres on an A4 page, `y` growing downwards. The material
//! block (and the optional service block under it) wraps at a fixed width and pushes
//! everything below it down; the date line never sits above [`MIN_DATE_Y`], and the
//! footnote is dropped rather than allowed to collide with the footer.

use super::canvas::{Align, DocumentCanvas, DrawOp, Font, FontStyle};
use super::{DocumentLabels, DocumentRenderError};
use crate::browse::format_date;
use crate::model::Order;
use tracing::{debug, info, instrument};

pub const MARGIN_X: f32 = 20.0;
pub const TITLE_Y: f32 = 80.0;
pub const NUMBER_X: f32 = 60.0;
pub const MATERIAL_LABEL_Y: f32 = 120.0;
pub const CONTENT_START_Y: f32 = 130.0;
pub const WRAP_WIDTH: f32 = 170.0;
pub const LINE_HEIGHT: f32 = 6.0;
pub const SERVICE_GAP: f32 = 6.0;
pub const BOX_TOP: f32 = 125.0;
pub const BOX_PADDING: f32 = 5.0;
pub const BOX_X: f32 = 18.0;
pub const BOX_WIDTH: f32 = 174.0;
pub const MIN_DATE_Y: f32 = 250.0;
pub const DATE_OFFSET: f32 = 20.0;
pub const VALUE_X: f32 = 55.0;
pub const COMMERCIAL_OFFSET: f32 = 10.0;
pub const FOOTNOTE_OFFSET: f32 = 20.0;
pub const PRINTABLE_LIMIT_Y: f32 = 285.0;
pub const FOOTER_X: f32 = 105.0;
pub const FOOTER_Y: f32 = 285.0;

const TITLE_FONT: Font = Font::new(FontStyle::Bold, 14.0);
const BODY_FONT: Font = Font::new(FontStyle::Normal, 12.0);
const FOOTNOTE_FONT: Font = Font::new(FontStyle::Italic, 10.0);
const FOOTER_FONT: Font = Font::new(FontStyle::Normal, 8.0);

/// Where things landed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    pub filename: String,
    pub material_lines: usize,
    pub service_lines: usize,
    /// `(y, height)` of the content box, when it was drawn.
    pub content_box: Option<(f32, f32)>,
    pub date_y: f32,
    pub commercial_y: f32,
    pub footnote_drawn: bool,
}

/// `{orderNumber}_{YYYY-MM-DD}.pdf`
pub fn document_filename(order: &Order) -> String {
    format!("{}_{}.pdf", order.order_number, order.date.format("%Y-%m-%d"))
}

/// Lays out orders with a fixed set of labels.
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    labels: DocumentLabels,
}

impl DocumentComposer {
    pub fn new(labels: DocumentLabels) -> Self {
        Self { labels }
    }

    /// Renders `order` onto `canvas` and saves it under [`document_filename`].
    #[instrument(skip(self, order, canvas), fields(order_number = order.order_number))]
    pub fn compose<C: DocumentCanvas>(
        &self,
        order: &Order,
        canvas: &mut C,
    ) -> Result<ComposedDocument, DocumentRenderError> {
        let (plan, document) = self.plan(order, canvas)?;
        debug!(ops = plan.len(), "Layout planned");

        for op in &plan {
            replay(op, canvas)?;
        }
        canvas.save(&document.filename)?;

        info!(filename = %document.filename, footnote = document.footnote_drawn, "Document saved");
        Ok(document)
    }

    /// Computes every draw operation without touching the canvas state.
    pub fn plan<C: DocumentCanvas>(
        &self,
        order: &Order,
        canvas: &C,
    ) -> Result<(Vec<DrawOp>, ComposedDocument), DocumentRenderError> {
        let mut ops = Vec::new();
        let labels = &self.labels;

        set_font(&mut ops, TITLE_FONT);
        text(&mut ops, &labels.order_title, MARGIN_X, TITLE_Y);
        text(&mut ops, &order.order_number.to_string(), NUMBER_X, TITLE_Y);

        set_font(&mut ops, BODY_FONT);
        text(&mut ops, &labels.material, MARGIN_X, MATERIAL_LABEL_Y);

        let mut cursor = CONTENT_START_Y;
        let material = canvas.split_text_to_size(&order.material, WRAP_WIDTH, BODY_FONT)?;
        let material_lines = material.len();
        ops.push(DrawOp::Text {
            lines: material,
            x: MARGIN_X,
            y: cursor,
            align: Align::Left,
        });
        cursor += material_lines as f32 * LINE_HEIGHT;

        let mut service_lines = 0;
        if let Some(service) = order.service_text() {
            cursor += SERVICE_GAP;
            ops.push(DrawOp::SetFont(FontStyle::Bold));
            text(&mut ops, &labels.service, MARGIN_X, cursor);
            cursor += LINE_HEIGHT;
            ops.push(DrawOp::SetFont(FontStyle::Normal));

            let lines = canvas.split_text_to_size(service, WRAP_WIDTH, BODY_FONT)?;
            service_lines = lines.len();
            ops.push(DrawOp::Text {
                lines,
                x: MARGIN_X,
                y: cursor,
                align: Align::Left,
            });
            cursor += service_lines as f32 * LINE_HEIGHT;
        }

        let box_height = cursor + BOX_PADDING - BOX_TOP;
        let content_box = if box_height > 0.0 {
            ops.push(DrawOp::Rect {
                x: BOX_X,
                y: BOX_TOP,
                width: BOX_WIDTH,
                height: box_height,
            });
            Some((BOX_TOP, box_height))
        } else {
            None
        };

        let date_y = MIN_DATE_Y.max(cursor + DATE_OFFSET);
        ops.push(DrawOp::SetFont(FontStyle::Normal));
        text(&mut ops, &labels.date, MARGIN_X, date_y);
        text(&mut ops, &format_date(order.date), VALUE_X, date_y);

        let commercial_y = date_y + COMMERCIAL_OFFSET;
        text(&mut ops, &labels.commercial, MARGIN_X, commercial_y);
        text(&mut ops, &order.commercial, VALUE_X, commercial_y);

        let footnote_y = commercial_y + FOOTNOTE_OFFSET;
        let footnote_drawn = footnote_y < PRINTABLE_LIMIT_Y;
        if footnote_drawn {
            set_font(&mut ops, FOOTNOTE_FONT);
            text(&mut ops, &labels.footnote, MARGIN_X, footnote_y);
        } else {
            debug!(footnote_y, "Footnote omitted, no room above footer");
        }

        set_font(&mut ops, FOOTER_FONT);
        ops.push(DrawOp::Text {
            lines: vec![labels.footer.clone()],
            x: FOOTER_X,
            y: FOOTER_Y,
            align: Align::Center,
        });

        let document = ComposedDocument {
            filename: document_filename(order),
            material_lines,
            service_lines,
            content_box,
            date_y,
            commercial_y,
            footnote_drawn,
        };
        Ok((ops, document))
    }
}

fn set_font(ops: &mut Vec<DrawOp>, font: Font) {
    ops.push(DrawOp::SetFont(font.style));
    ops.push(DrawOp::SetFontSize(font.size));
}

fn text(ops: &mut Vec<DrawOp>, value: &str, x: f32, y: f32) {
    ops.push(DrawOp::Text {
        lines: vec![value.to_string()],
        x,
        y,
        align: Align::Left,
    });
}

fn replay<C: DocumentCanvas>(op: &DrawOp, canvas: &mut C) -> Result<(), DocumentRenderError> {
    match op {
        DrawOp::SetFont(style) => canvas.set_font(*style),
        DrawOp::SetFontSize(size) => canvas.set_font_size(*size),
        DrawOp::Text { lines, x, y, align } => canvas.text(lines, *x, *y, *align),
        DrawOp::Rect {
            x,
            y,
            width,
            height,
        } => canvas.rect(*x, *y, *width, *height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RecordingCanvas;
    use crate::model::{OrderDraft, OrderId};
    use chrono::NaiveDate;

    fn order(material: &str, service: Option<&str>) -> Order {
        Order::from_draft(
            OrderId::from("o7"),
            7,
            OrderDraft {
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                supplier: "Bofitel".into(),
                material: material.into(),
                service_description: service.map(Into::into),
                customer: "Atelier Sul".into(),
                commercial: "Cristiana".into(),
            },
        )
    }

    fn compose(order: &Order) -> (ComposedDocument, RecordingCanvas) {
        let mut canvas = RecordingCanvas::new();
        let document = DocumentComposer::default()
            .compose(order, &mut canvas)
            .unwrap();
        (document, canvas)
    }

    #[test]
    fn test_short_order_layout() {
        let (document, canvas) = compose(&order("Fita de cetim 25mm", None));

        assert_eq!(document.filename, "7_2024-03-05.pdf");
        assert_eq!(canvas.saved_as(), Some("7_2024-03-05.pdf"));
        assert_eq!(document.material_lines, 1);
        // cursor ends at 136, box bottom at 141
        assert_eq!(document.content_box, Some((125.0, 16.0)));
        assert_eq!(document.date_y, 250.0);
        assert_eq!(document.commercial_y, 260.0);
        assert!(document.footnote_drawn);

        let lines = canvas.text_lines();
        assert_eq!(lines[0], "Order No.");
        assert_eq!(lines[1], "7");
        assert!(lines.contains(&"05/03/2024"));
        assert!(lines.contains(&"Cristiana"));
        assert_eq!(*lines.last().unwrap(), "Nastrotex - Purchase Order - docint112026");
    }

    #[test]
    fn test_footer_is_centered_at_fixed_position() {
        let (_, canvas) = compose(&order("Linha", None));
        let footer = canvas.ops().last().unwrap();
        assert!(matches!(
            footer,
            DrawOp::Text { x, y, align: Align::Center, .. } if *x == FOOTER_X && *y == FOOTER_Y
        ));
    }

    #[test]
    fn test_service_block_adds_label_and_lines() {
        let (document, canvas) = compose(&order("Etiquetas", Some("Corte e dobragem")));

        assert_eq!(document.service_lines, 1);
        // 130 + 6 (material) + 6 (gap) + 6 (label) + 6 (service) = 154
        assert_eq!(document.content_box, Some((125.0, 34.0)));
        assert!(canvas.text_lines().contains(&"Service description:"));
        assert!(canvas.ops().contains(&DrawOp::SetFont(FontStyle::Bold)));
    }

    #[test]
    fn test_blank_service_is_skipped() {
        let (document, canvas) = compose(&order("Etiquetas", Some("   ")));
        assert_eq!(document.service_lines, 0);
        assert!(!canvas.text_lines().contains(&"Service description:"));
    }

    #[test]
    fn test_long_material_grows_content_box() {
        let material = "Fita jacquard tecida com logotipo ".repeat(15);
        assert!(material.len() >= 500);
        let (document, canvas) = compose(&order(&material, None));

        assert!(document.material_lines > 1);
        let (top, height) = document.content_box.unwrap();
        assert_eq!(top, BOX_TOP);
        assert!(height > 16.0);
        assert_eq!(
            height,
            CONTENT_START_Y + document.material_lines as f32 * LINE_HEIGHT + BOX_PADDING - BOX_TOP
        );
        // still above the minimum, so the lower block stays put
        assert_eq!(document.date_y, MIN_DATE_Y);
        assert!(document.footnote_drawn);
        assert!(canvas.saved_as().is_some());
    }

    #[test]
    fn test_content_past_minimum_moves_date_down() {
        // 17 lines: cursor 232, date 252, commercial 262, footnote 282
        let material = vec!["linha"; 17].join("\n");
        let (document, canvas) = compose(&order(&material, None));

        assert_eq!(document.date_y, 252.0);
        assert_eq!(document.commercial_y, 262.0);
        assert!(document.footnote_drawn);
        let footnote_y = canvas.ops().iter().find_map(|op| match op {
            DrawOp::Text { lines, y, .. } if lines[0].contains("OEKO-TEX") => Some(*y),
            _ => None,
        });
        assert_eq!(footnote_y, Some(282.0));
    }

    #[test]
    fn test_footnote_omitted_when_no_room() {
        // 20 lines: cursor 250, date 270, commercial 280, footnote would be at 300
        let material = vec!["linha"; 20].join("\n");
        let (document, canvas) = compose(&order(&material, None));

        assert_eq!(document.material_lines, 20);
        assert_eq!(document.date_y, 270.0);
        assert!(!document.footnote_drawn);
        assert!(!canvas
            .text_lines()
            .iter()
            .any(|line| line.contains("OEKO-TEX")));
        assert!(canvas.text_lines().contains(&"Nastrotex - Purchase Order - docint112026"));
    }

    #[test]
    fn test_material_and_service_overflow_still_saves() {
        // 130 + 20*6 + 6 (gap) + 6 (label) + 10*6 = 322
        let material = vec!["linha"; 20].join("\n");
        let service = vec!["passo"; 10].join("\n");
        let (document, canvas) = compose(&order(&material, Some(&service)));

        assert_eq!(document.material_lines, 20);
        assert_eq!(document.service_lines, 10);
        assert_eq!(document.content_box, Some((125.0, 202.0)));
        assert_eq!(document.date_y, 342.0);
        assert_eq!(document.commercial_y, 352.0);
        assert!(document.commercial_y >= PRINTABLE_LIMIT_Y);
        assert!(!document.footnote_drawn);
        assert!(!canvas.text_lines().iter().any(|line| line.contains("OEKO-TEX")));
        assert_eq!(canvas.saved_as(), Some("7_2024-03-05.pdf"));
        assert!(matches!(
            canvas.ops().last(),
            Some(DrawOp::Text { y, .. }) if *y == FOOTER_Y
        ));
    }

    #[test]
    fn test_portuguese_labels() {
        let mut canvas = RecordingCanvas::new();
        DocumentComposer::new(DocumentLabels::portuguese())
            .compose(&order("Fio", None), &mut canvas)
            .unwrap();
        assert_eq!(canvas.text_lines()[0], "Encomenda Nº");
    }

    #[test]
    fn test_wrap_failure_draws_and_saves_nothing() {
        let mut canvas = RecordingCanvas::failing_wrap();
        let result = DocumentComposer::default().compose(&order("Fio", None), &mut canvas);

        assert!(matches!(result, Err(DocumentRenderError::Wrap(_))));
        assert!(canvas.ops().is_empty());
        assert_eq!(canvas.saved_as(), None);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let order = order("Cordão encerado", Some("Pontas metálicas"));
        let (first_doc, first) = compose(&order);
        let (second_doc, second) = compose(&order);
        assert_eq!(first_doc, second_doc);
        assert_eq!(first.ops(), second.ops());
    }
}
