//! egui widget for the floating-label text view.

use egui::{FontId, Id, Margin, Pos2, Response, Sense, TextEdit, Ui, Widget, vec2};
use floatlabel_core::FloatingLabelTextView;
use floatlabel_core::geometry::{about_center, transform_scale};
use kurbo::{Rect, Size};

use crate::animator::FrameAnimator;
use crate::convert::{to_color32, to_egui_rect};

/// Control hosted by egui.
pub type EguiTextView = FloatingLabelTextView<FrameAnimator>;

/// Create a control backed by a [`FrameAnimator`].
pub fn egui_text_view() -> EguiTextView {
    FloatingLabelTextView::new(FrameAnimator::default())
}

/// Multi-line text edit with a floating placeholder.
///
/// Add it every frame with `ui.add(FloatingLabelTextEdit::new(&mut view))`.
/// The returned response is the editor's.
pub struct FloatingLabelTextEdit<'a> {
    view: &'a mut EguiTextView,
    id_salt: Id,
    desired_width: Option<f32>,
}

impl<'a> FloatingLabelTextEdit<'a> {
    pub fn new(view: &'a mut EguiTextView) -> Self {
        Self {
            view,
            id_salt: Id::new("floating_label_text_edit"),
            desired_width: None,
        }
    }

    /// Distinguish several controls in the same `Ui`.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Width of the control (defaults to the available width).
    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }
}

impl Widget for FloatingLabelTextEdit<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let view = self.view;
        let width = self.desired_width.unwrap_or_else(|| ui.available_width());
        let height = view.intrinsic_height() as f32;
        let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        view.host_mut().set_bounds(Size::new(width as f64, height as f64));
        view.layout_if_bounds_changed();

        let now = ui.input(|i| i.time);
        if let Some(ticket) = view.host_mut().tick(now) {
            view.finish_animation(ticket);
        }

        paint_placeholder(ui, view, rect.min);

        let style = *view.style();
        let body = to_egui_rect(view.geometry().bottom_label_frame(), rect.min);
        let editor_id = ui.make_persistent_id(self.id_salt);
        let response = ui
            .scope(|ui| {
                ui.visuals_mut().text_cursor.stroke.color = to_color32(style.cursor_color);
                let editor = TextEdit::multiline(view.text_mut())
                    .id(editor_id)
                    .frame(false)
                    .margin(Margin::ZERO)
                    .font(FontId::proportional(style.font_size as f32))
                    .text_color(to_color32(style.text_color))
                    .desired_width(body.width())
                    .desired_rows(1);
                ui.put(body, editor)
            })
            .inner;

        if response.gained_focus() {
            view.focus_gained();
        }
        if response.changed() {
            view.notify_text_changed();
        }
        if response.lost_focus() {
            view.focus_lost();
        }

        if view.is_animating() || view.host().is_animating() {
            ui.ctx().request_repaint();
        }

        response
    }
}

/// Paint the placeholder at its presented position and scale.
fn paint_placeholder(ui: &Ui, view: &EguiTextView, origin: Pos2) {
    let host = view.host();
    let geometry = view.geometry();
    let transform = host.presented_transform();

    let rest = Rect::from_origin_size(
        geometry.bottom_label_frame().origin(),
        Size::new(host.placeholder_width(), view.metrics().bottom_label_height),
    );
    let visual = about_center(transform, rest.center()).transform_rect_bbox(rest);
    let visual = to_egui_rect(visual, origin);

    let style = view.style();
    let font_size = (style.font_size * transform_scale(transform)) as f32;
    let color = to_color32(style.placeholder_color);
    let galley = ui.painter().layout(
        view.placeholder_text().to_string(),
        FontId::proportional(font_size),
        color,
        visual.width(),
    );
    let pos = Pos2::new(visual.left(), visual.center().y - galley.size().y / 2.0);
    ui.painter().galley(pos, galley, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatlabel_core::{DisplayState, LabelHost, LabelPhase};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A point inside the text body with the default panel margin.
    const BODY_POINT: Pos2 = Pos2::new(50.0, 35.0);

    fn run_frame_with(
        ctx: &egui::Context,
        view: &mut EguiTextView,
        time: f64,
        width: f32,
        events: Vec<egui::Event>,
    ) -> Response {
        let mut response = None;
        let input = egui::RawInput {
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = Some(ui.add(FloatingLabelTextEdit::new(view).desired_width(width)));
            });
        });
        response.expect("widget was not shown")
    }

    fn run_frame(ctx: &egui::Context, view: &mut EguiTextView, time: f64) -> Response {
        run_frame_with(ctx, view, time, 240.0, Vec::new())
    }

    fn click(pos: Pos2) -> Vec<egui::Event> {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        vec![egui::Event::PointerMoved(pos), button(true), button(false)]
    }

    fn key(key: egui::Key) -> Vec<egui::Event> {
        vec![egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }]
    }

    /// Feeds event batches on consecutive short frames, then one idle frame.
    struct Session {
        ctx: egui::Context,
        time: f64,
    }

    impl Session {
        fn new(view: &mut EguiTextView) -> Self {
            let ctx = egui::Context::default();
            run_frame(&ctx, view, 0.0);
            Self { ctx, time: 0.0 }
        }

        fn send(&mut self, view: &mut EguiTextView, events: Vec<egui::Event>) {
            for events in [events, Vec::new()] {
                self.time += 0.01;
                run_frame_with(&self.ctx, view, self.time, 240.0, events);
            }
        }
    }

    type Sink = Rc<RefCell<Vec<String>>>;

    fn record_callbacks(view: &mut EguiTextView) -> (Sink, Sink) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let ended = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        view.on_text_change(move |text| sink.borrow_mut().push(text.to_string()));
        let sink = ended.clone();
        view.on_end_editing(move |text| sink.borrow_mut().push(text.to_string()));
        (changes, ended)
    }

    #[test]
    fn test_widget_takes_constant_height() {
        let ctx = egui::Context::default();
        let mut view = egui_text_view();
        run_frame(&ctx, &mut view, 0.0);

        assert_eq!(view.host().bounds(), Size::new(240.0, view.intrinsic_height()));
        assert_eq!(view.host().placeholder_width(), 240.0);
        assert_eq!(view.state(), DisplayState::no_text(false));
    }

    #[test]
    fn test_widget_relayouts_on_width_change() {
        let ctx = egui::Context::default();
        let mut view = egui_text_view();
        run_frame(&ctx, &mut view, 0.0);
        let passes = view.host().layout_passes();

        run_frame(&ctx, &mut view, 0.01);
        assert_eq!(view.host().layout_passes(), passes);

        run_frame_with(&ctx, &mut view, 0.02, 320.0, Vec::new());
        assert_eq!(view.host().layout_passes(), passes + 1);
        assert_eq!(view.host().placeholder_width(), 320.0);
    }

    #[test]
    fn test_widget_completes_animation_on_later_frame() {
        let ctx = egui::Context::default();
        let mut view = egui_text_view();
        run_frame(&ctx, &mut view, 0.0);

        view.focus_gained();
        assert!(view.is_animating());

        run_frame(&ctx, &mut view, 0.1);
        assert!(view.is_animating());
        run_frame(&ctx, &mut view, 0.5);
        assert_eq!(view.state(), DisplayState::entered_text(false));
    }

    #[test]
    fn test_editor_events_drive_label() {
        let mut view = egui_text_view();
        let (changes, ended) = record_callbacks(&mut view);
        let mut session = Session::new(&mut view);

        session.send(&mut view, click(BODY_POINT));
        assert_eq!(view.state(), DisplayState::entered_text(true));

        session.send(&mut view, vec![egui::Event::Text("hi".to_string())]);
        assert_eq!(*changes.borrow(), vec!["hi".to_string()]);
        assert_eq!(view.text(), Some("hi"));
        assert!(ended.borrow().is_empty());

        session.send(&mut view, key(egui::Key::Escape));
        assert_eq!(*ended.borrow(), vec!["hi".to_string()]);
        assert_eq!(view.state().phase, LabelPhase::EnteredText);
    }

    #[test]
    fn test_blur_with_cleared_text_undocks() {
        let mut view = egui_text_view();
        let (changes, ended) = record_callbacks(&mut view);
        let mut session = Session::new(&mut view);

        session.send(&mut view, click(BODY_POINT));
        session.send(&mut view, vec![egui::Event::Text("a".to_string())]);
        session.send(&mut view, key(egui::Key::Backspace));
        assert_eq!(*changes.borrow(), vec!["a".to_string(), String::new()]);

        session.send(&mut view, key(egui::Key::Escape));
        assert_eq!(*ended.borrow(), vec![String::new()]);
        assert_eq!(view.state(), DisplayState::no_text(true));
    }
}
