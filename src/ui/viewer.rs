use eframe::egui;
use egui::{Color32, RichText, TextureHandle, Vec2};

use crate::config::config::*;
use crate::core::gallery::GalleryModel;
use crate::core::image_loader::ImageLoaderFactory;
use crate::core::texture_cache::TextureCache;
use crate::i18n::{tr, Locale, TextId};
use crate::ui::navigation_controller::NavigationController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    None,
    Previous,
    Next,
}

pub struct ArtSpaceApp {
    navigation: NavigationController,
    locale: Locale,
    loader: ImageLoaderFactory,
    textures: TextureCache,
    rendered_revision: Option<u64>,
}

impl ArtSpaceApp {
    pub fn new(gallery: GalleryModel, locale: Locale) -> Self {
        let textures = TextureCache::new(gallery.len());
        Self {
            navigation: NavigationController::new(gallery),
            locale,
            loader: ImageLoaderFactory::default(),
            textures,
            rendered_revision: None,
        }
    }

    /// Uploads every artwork up front so stepping never waits on a decode.
    pub fn init(&mut self, ctx: &egui::Context) {
        let failed = self
            .navigation
            .gallery()
            .iter()
            .filter(|record| {
                self.textures
                    .get_or_load(ctx, &self.loader, &record.image_ref())
                    .is_none()
            })
            .count();
        log::info!(
            "{} ready with {} artworks ({} textures, {} failed)",
            APP_NAME,
            self.navigation.len(),
            self.textures.len(),
            failed
        );
    }

    fn previous_artwork(&mut self) {
        if self.navigation.step_backward() {
            log::debug!("stepped back to artwork {}", self.navigation.cursor());
        }
    }

    fn next_artwork(&mut self) {
        if self.navigation.step_next() {
            log::debug!("stepped forward to artwork {}", self.navigation.cursor());
        }
    }

    fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Previous => self.previous_artwork(),
            NavAction::Next => self.next_artwork(),
            NavAction::None => {}
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                NavAction::Previous
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                NavAction::Next
            } else {
                NavAction::None
            }
        });
        self.apply(action);
    }

    fn note_render(&mut self) {
        log::trace!("render");
        let revision = self.navigation.revision();
        if self.rendered_revision != Some(revision) {
            let record = self.navigation.current();
            log::debug!(
                "showing {}/{}: {:?} by {}",
                self.navigation.cursor() + 1,
                self.navigation.len(),
                record.title(),
                record.author()
            );
            self.rendered_revision = Some(revision);
        }
    }

    fn show_screen(&self, ui: &mut egui::Ui, texture: Option<&TextureHandle>) -> NavAction {
        let screen_height = ui.ctx().screen_rect().height();
        let rect = ui
            .max_rect()
            .shrink2(egui::vec2(SCREEN_PADDING_X, SCREEN_PADDING_Y));

        // Buttons and description are laid out first, from the bottom, so the
        // image frame only ever takes the height that is left.
        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            ui.spacing_mut().item_spacing.y = BLOCK_SPACING;
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                let action = self.show_action_buttons(ui);
                self.show_art_description(ui);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    let frame_height =
                        (screen_height * IMAGE_HEIGHT_FRACTION).min(ui.available_height());
                    self.show_art_image(ui, texture, frame_height);
                });
                action
            })
            .inner
        })
        .inner
    }

    fn show_art_image(&self, ui: &mut egui::Ui, texture: Option<&TextureHandle>, frame_height: f32) {
        let inset = 2.0 * (IMAGE_INNER_PADDING + IMAGE_BORDER_WIDTH);
        let bounds = egui::vec2(
            (ui.available_width() - inset).max(0.0),
            (frame_height - inset).max(0.0),
        );

        egui::Frame::default()
            .stroke(egui::Stroke::new(IMAGE_BORDER_WIDTH, Color32::GRAY))
            .shadow(ui.style().visuals.popup_shadow)
            .inner_margin(IMAGE_INNER_PADDING)
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(bounds, egui::Sense::hover());
                match texture {
                    Some(texture) => {
                        let size = fit_size(texture.size_vec2(), bounds);
                        egui::Image::from_texture(texture)
                            .fit_to_exact_size(size)
                            .paint_at(ui, egui::Rect::from_center_size(rect.center(), size));
                    }
                    None => {
                        let text = if self.textures.has_failed(self.navigation.current().image_ref().name()) {
                            tr(self.locale, TextId::ImageError)
                        } else {
                            tr(self.locale, TextId::Loading)
                        };
                        ui.put(rect, egui::Label::new(text));
                    }
                }
            });
    }

    fn show_art_description(&self, ui: &mut egui::Ui) {
        let record = self.navigation.current();

        egui::Frame::default()
            .shadow(ui.style().visuals.window_shadow)
            .fill(ui.style().visuals.panel_fill)
            .inner_margin(DESCRIPTION_PADDING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.spacing_mut().item_spacing.y = 4.0;
                ui.add(
                    egui::Label::new(RichText::new(record.title()).size(TITLE_FONT_SIZE))
                        .truncate(),
                );
                ui.horizontal(|ui| {
                    ui.label(RichText::new(record.author()).size(BYLINE_FONT_SIZE).strong());
                    ui.label(RichText::new(format!("({})", record.year())).size(BYLINE_FONT_SIZE));
                });
                ui.label(
                    RichText::new(format!(
                        "{} / {}",
                        self.navigation.cursor() + 1,
                        self.navigation.len()
                    ))
                    .weak(),
                )
                .on_hover_text(tr(self.locale, TextId::KeysHint));
            });
    }

    /// Whether Previous and Next are clickable. A button whose step would
    /// be a no-op is disabled.
    fn button_states(&self) -> (bool, bool) {
        (
            self.navigation.can_step_backward(),
            self.navigation.can_step_next(),
        )
    }

    fn show_action_buttons(&self, ui: &mut egui::Ui) -> NavAction {
        let button_size = egui::vec2(BUTTON_WIDTH, 0.0);
        let (previous_enabled, next_enabled) = self.button_states();
        let mut action = NavAction::None;

        ui.horizontal(|ui| {
            let previous = egui::Button::new(tr(self.locale, TextId::Previous)).min_size(button_size);
            if ui.add_enabled(previous_enabled, previous).clicked() {
                action = NavAction::Previous;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = egui::Button::new(tr(self.locale, TextId::Next)).min_size(button_size);
                if ui.add_enabled(next_enabled, next).clicked() {
                    action = NavAction::Next;
                }
            });
        });

        action
    }
}

impl eframe::App for ArtSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);
        self.note_render();

        let image_ref = self.navigation.current().image_ref();
        let texture = self.textures.get_or_load(ctx, &self.loader, &image_ref);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_screen(ui, texture.as_ref()))
            .inner;
        self.apply(action);
    }
}

/// Largest size with `image`'s aspect ratio that fits inside `bounds`.
fn fit_size(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).max(0.0);
    image * scale
}
