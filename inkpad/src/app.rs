//! inkpad application — controller and view
//!
//! Owns the document, the undo history, and all dialog state, and wires
//! menu actions and keyboard shortcuts to the model and the file service.
//! The editor itself is egui's TextEdit::multiline; its change
//! notification drives the modified flag and undo checkpointing. Undo and
//! redo write the restored text straight into the document, so they never
//! re-enter the user-edit path.

use crate::document::Document;
use crate::file_io::{self, FileError};
use crate::history::{EditTrigger, History};
use egui::{Align2, Context, Key};
use inkcore::repaint::RepaintController;
use inkcore::storage::{config_dir, documents_dir, FileBrowser, RecentFiles};
use inkcore::theme::{consume_special_keys, menu_bar, InkColors};
use inkcore::widgets::{status_bar, FileListItem};
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq)]
enum FileBrowserMode {
    Open,
    Save,
}

/// Editor font choice, settable from the Format menu.
#[derive(Clone, Copy, PartialEq)]
enum EditorFont {
    Proportional,
    Monospace,
}

/// Application state
pub struct InkpadApp {
    document: Document,
    history: History,
    recent_files: RecentFiles,
    show_file_browser: bool,
    file_browser: FileBrowser,
    file_browser_mode: FileBrowserMode,
    save_filename: String,
    /// Save-as target waiting on overwrite confirmation.
    pending_overwrite: Option<PathBuf>,
    /// Message for the blocking I/O error dialog.
    error_message: Option<String>,
    show_about: bool,
    show_shortcuts: bool,
    show_close_confirm: bool,
    close_confirmed: bool,
    /// Format menu state
    editor_font: EditorFont,
    editor_font_size: f32,
    font_sizes: Vec<f32>,
    /// Native window title as last pushed to the viewport.
    window_title: String,
    repaint: RepaintController,
}

const OPEN_EXTENSIONS: &[&str] = &["txt", "md"];

impl InkpadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = config_dir("inkpad").join("recent.json");
        let recent_files =
            RecentFiles::load(&config_path).unwrap_or_else(|_| RecentFiles::new(10));

        Self {
            document: Document::new(),
            history: History::new(""),
            recent_files,
            show_file_browser: false,
            file_browser: Self::open_browser(),
            file_browser_mode: FileBrowserMode::Open,
            save_filename: String::new(),
            pending_overwrite: None,
            error_message: None,
            show_about: false,
            show_shortcuts: false,
            show_close_confirm: false,
            close_confirmed: false,
            editor_font: EditorFont::Proportional,
            editor_font_size: 16.0,
            font_sizes: vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0],
            window_title: String::new(),
            repaint: RepaintController::new(),
        }
    }

    fn open_browser() -> FileBrowser {
        FileBrowser::new(documents_dir())
            .with_filter(OPEN_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }

    // ---------------------------------------------------------------
    // Document operations
    // ---------------------------------------------------------------

    fn new_document(&mut self) {
        self.document = Document::new();
        self.history.reset("");
    }

    pub fn open_file(&mut self, path: PathBuf) {
        match Document::open(path.clone()) {
            Ok(doc) => {
                self.history.reset(&doc.text);
                self.document = doc;
                self.recent_files.add(path);
                self.save_recent_files();
            }
            Err(e) => self.report_error("opened", &e),
        }
    }

    fn save_document(&mut self) {
        if self.document.path.is_some() {
            if let Err(e) = self.document.save() {
                self.report_error("saved", &e);
            }
        } else {
            self.show_save_as_dialog();
        }
    }

    /// Save-as target chosen in the dialog: ask before clobbering an
    /// existing file, otherwise write immediately.
    fn request_save_as(&mut self, path: PathBuf) {
        if path.exists() {
            self.pending_overwrite = Some(path);
        } else {
            self.save_document_as(path);
        }
    }

    fn save_document_as(&mut self, path: PathBuf) {
        match self.document.save_as(path.clone()) {
            Ok(()) => {
                self.recent_files.add(path);
                self.save_recent_files();
            }
            Err(e) => self.report_error("saved", &e),
        }
    }

    fn undo(&mut self) {
        if let Some(text) = self.history.undo(&self.document.text) {
            self.document.text = text;
            self.document.modified = true;
        }
    }

    fn redo(&mut self) {
        if let Some(text) = self.history.redo(&self.document.text) {
            self.document.text = text;
            self.document.modified = true;
        }
    }

    // ---------------------------------------------------------------
    // Dialog state
    // ---------------------------------------------------------------

    fn show_open_dialog(&mut self) {
        self.file_browser = Self::open_browser();
        self.file_browser_mode = FileBrowserMode::Open;
        self.show_file_browser = true;
    }

    fn show_save_as_dialog(&mut self) {
        self.file_browser = FileBrowser::new(documents_dir());
        self.file_browser_mode = FileBrowserMode::Save;
        self.save_filename = file_io::ensure_txt_extension(&self.document.file_name());
        self.show_file_browser = true;
    }

    fn save_recent_files(&self) {
        let config_path = config_dir("inkpad").join("recent.json");
        let _ = self.recent_files.save(&config_path);
    }

    fn report_error(&mut self, verb: &str, err: &FileError) {
        eprintln!("file could not be {}: {}", verb, err);
        self.error_message = Some(format!("the file cannot be {}.\n\n{}", verb, err));
    }

    /// Push the document title to the native window frame when it changes.
    fn sync_window_title(&mut self, ctx: &Context) {
        let title = format!("{} — inkpad", self.document.display_title());
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    // ---------------------------------------------------------------
    // Keyboard handling
    // ---------------------------------------------------------------

    /// Intercept Cmd+key shortcuts before TextEdit consumes them (the
    /// stripped Z/Y events also disable TextEdit's built-in undoer, which
    /// would otherwise fight the checkpoint history).
    fn handle_keyboard(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let mut actions: Vec<Box<dyn FnOnce(&mut Self)>> = Vec::new();

        ctx.input_mut(|i| {
            let cmd = i.modifiers.command;
            let shift = i.modifiers.shift;

            let events = std::mem::take(&mut i.events);
            let mut remaining = Vec::new();

            for event in events {
                let mut handled = false;
                if let egui::Event::Key { key, pressed: true, .. } = &event {
                    match key {
                        // File operations
                        Key::N if cmd => { handled = true; actions.push(Box::new(|s| s.new_document())); }
                        Key::O if cmd => { handled = true; actions.push(Box::new(|s| s.show_open_dialog())); }
                        Key::S if cmd && shift => { handled = true; actions.push(Box::new(|s| s.show_save_as_dialog())); }
                        Key::S if cmd => { handled = true; actions.push(Box::new(|s| s.save_document())); }
                        // Undo/redo
                        Key::Z if cmd && shift => { handled = true; actions.push(Box::new(|s| s.redo())); }
                        Key::Z if cmd => { handled = true; actions.push(Box::new(|s| s.undo())); }
                        Key::Y if cmd => { handled = true; actions.push(Box::new(|s| s.redo())); }
                        _ => {}
                    }
                }
                if !handled {
                    remaining.push(event);
                }
            }
            i.events = remaining;
        });

        for action in actions {
            action(self);
        }
    }

    /// Classify this frame's input as an undo trigger. Runs only when the
    /// editor reported a change, so the events describe that edit.
    fn classify_edit(ctx: &Context) -> EditTrigger {
        ctx.input(|i| {
            if i.key_pressed(Key::Backspace) || i.key_pressed(Key::Delete) {
                return EditTrigger::Destructive;
            }
            for event in &i.events {
                match event {
                    egui::Event::Cut => return EditTrigger::Destructive,
                    // Pasted blocks are a checkpoint of their own
                    egui::Event::Paste(_) => return EditTrigger::WordBoundary,
                    egui::Event::Text(t) if t.chars().count() > 1 => {
                        return EditTrigger::WordBoundary;
                    }
                    egui::Event::Text(t) => return EditTrigger::from_insertion(t),
                    _ => {}
                }
            }
            // Enter inserts the newline as a key event, not a text event
            if i.key_pressed(Key::Enter) {
                EditTrigger::WordBoundary
            } else {
                EditTrigger::Plain
            }
        })
    }

    // ---------------------------------------------------------------
    // Menus
    // ---------------------------------------------------------------

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                if ui.button("new        \u{2318}n").clicked() {
                    self.new_document();
                    ui.close_menu();
                }
                if ui.button("open...    \u{2318}o").clicked() {
                    self.show_open_dialog();
                    ui.close_menu();
                }
                ui.menu_button("open recent", |ui| {
                    if self.recent_files.files.is_empty() {
                        ui.label("no recent files");
                    } else {
                        for path in self.recent_files.files.clone() {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or("unknown".to_string());
                            if ui.button(&name).clicked() {
                                self.open_file(path);
                                ui.close_menu();
                            }
                        }
                    }
                });
                ui.separator();
                if ui.button("save       \u{2318}s").clicked() {
                    self.save_document();
                    ui.close_menu();
                }
                if ui.button("save as... \u{21e7}\u{2318}s").clicked() {
                    self.show_save_as_dialog();
                    ui.close_menu();
                }
            });

            ui.menu_button("edit", |ui| {
                let undo_btn = egui::Button::new("undo       \u{2318}z");
                if ui.add_enabled(self.history.can_undo(), undo_btn).clicked() {
                    self.undo();
                    ui.close_menu();
                }
                let redo_btn = egui::Button::new("redo       \u{2318}y");
                if ui.add_enabled(self.history.can_redo(), redo_btn).clicked() {
                    self.redo();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("cut        \u{2318}x").clicked() {
                    // TextEdit handles the clipboard natively; the menu
                    // routes through the same event path
                    ui.ctx().input_mut(|i| {
                        i.events.push(egui::Event::Cut);
                    });
                    ui.close_menu();
                }
                if ui.button("copy       \u{2318}c").clicked() {
                    ui.ctx().input_mut(|i| {
                        i.events.push(egui::Event::Copy);
                    });
                    ui.close_menu();
                }
                if ui.button("paste      \u{2318}v").clicked() {
                    let text = arboard::Clipboard::new().ok()
                        .and_then(|mut c| c.get_text().ok())
                        .unwrap_or_default();
                    if !text.is_empty() {
                        ui.ctx().input_mut(|i| {
                            i.events.push(egui::Event::Text(text));
                        });
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("select all \u{2318}a").clicked() {
                    ui.ctx().input_mut(|i| {
                        i.events.push(egui::Event::Key {
                            key: Key::A,
                            physical_key: Some(Key::A),
                            pressed: true,
                            repeat: false,
                            modifiers: egui::Modifiers::COMMAND,
                        });
                    });
                    ui.close_menu();
                }
            });

            ui.menu_button("format", |ui| {
                ui.menu_button("font", |ui| {
                    let prop = self.editor_font == EditorFont::Proportional;
                    let prop_label = if prop { "> proportional" } else { "  proportional" };
                    let mono_label = if prop { "  monospace" } else { "> monospace" };
                    if ui.button(prop_label).clicked() {
                        self.editor_font = EditorFont::Proportional;
                        ui.close_menu();
                    }
                    if ui.button(mono_label).clicked() {
                        self.editor_font = EditorFont::Monospace;
                        ui.close_menu();
                    }
                });
                ui.menu_button("font size", |ui| {
                    for &size in &self.font_sizes.clone() {
                        let mark = if (size - self.editor_font_size).abs() < f32::EPSILON { ">" } else { " " };
                        let label = format!("{} {}pt", mark, size as u32);
                        if ui.button(&label).clicked() {
                            self.editor_font_size = size;
                            ui.close_menu();
                        }
                    }
                });
            });

            ui.menu_button("help", |ui| {
                if ui.button("keyboard shortcuts").clicked() {
                    self.show_shortcuts = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("about").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
    }

    // ---------------------------------------------------------------
    // Editor panel
    // ---------------------------------------------------------------

    fn editor_font_id(&self) -> egui::FontId {
        match self.editor_font {
            EditorFont::Proportional => egui::FontId::proportional(self.editor_font_size),
            EditorFont::Monospace => egui::FontId::monospace(self.editor_font_size),
        }
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let font_id = self.editor_font_id();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut self.document.text)
                    .font(font_id)
                    .desired_width(available.x)
                    .desired_rows((available.y / 20.0).max(4.0) as usize)
                    .frame(false)
                    .show(ui);

                // Change notification: typing, paste, delete, cut. Undo and
                // redo mutate the text directly and never raise this.
                if output.response.changed() {
                    self.document.modified = true;
                    let trigger = Self::classify_edit(ui.ctx());
                    self.history.record_edit(&self.document.text, trigger);
                }
            });
    }

    // ---------------------------------------------------------------
    // Dialogs
    // ---------------------------------------------------------------

    fn render_file_browser(&mut self, ctx: &Context) {
        let title = match self.file_browser_mode {
            FileBrowserMode::Open => "open document",
            FileBrowserMode::Save => "save document",
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.file_browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let entries = self.file_browser.entries.clone();
                        for (idx, entry) in entries.iter().enumerate() {
                            let selected = self.file_browser.selected_index == Some(idx);
                            let response = ui.add(
                                FileListItem::new(&entry.name, entry.is_directory)
                                    .selected(selected),
                            );
                            if response.clicked() {
                                self.file_browser.selected_index = Some(idx);
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    self.file_browser.navigate_to(entry.path.clone());
                                } else if self.file_browser_mode == FileBrowserMode::Open {
                                    let p = entry.path.clone();
                                    self.show_file_browser = false;
                                    self.open_file(p);
                                }
                            }
                        }
                    });
                if self.file_browser_mode == FileBrowserMode::Save {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("filename:");
                        ui.text_edit_singleline(&mut self.save_filename);
                    });
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        self.show_file_browser = false;
                    }
                    let action_text = match self.file_browser_mode {
                        FileBrowserMode::Open => "open",
                        FileBrowserMode::Save => "save",
                    };
                    if ui.button(action_text).clicked() {
                        match self.file_browser_mode {
                            FileBrowserMode::Open => {
                                if let Some(entry) = self.file_browser.selected_entry() {
                                    if !entry.is_directory {
                                        let p = entry.path.clone();
                                        self.show_file_browser = false;
                                        self.open_file(p);
                                    }
                                }
                            }
                            FileBrowserMode::Save => {
                                if !self.save_filename.is_empty() {
                                    let name = file_io::ensure_txt_extension(&self.save_filename);
                                    let path = self.file_browser.save_directory().join(name);
                                    self.show_file_browser = false;
                                    self.request_save_as(path);
                                }
                            }
                        }
                    }
                });
            });
    }

    fn render_overwrite_confirm(&mut self, ctx: &Context) {
        let Some(path) = self.pending_overwrite.clone() else { return };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or("file".to_string());
        egui::Window::new("replace file")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("\"{}\" already exists.", name));
                ui.label("do you want to replace it?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        self.pending_overwrite = None;
                    }
                    if ui.button("replace").clicked() {
                        self.pending_overwrite = None;
                        self.save_document_as(path.clone());
                    }
                });
            });
    }

    fn render_error(&mut self, ctx: &Context) {
        let Some(message) = self.error_message.clone() else { return };
        egui::Window::new("error")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.error_message = None;
                    }
                });
            });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about inkpad")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("inkpad");
                    ui.label("version 0.1.0");
                    ui.add_space(8.0);
                    ui.label("a minimal notepad");
                });
                ui.add_space(8.0);
                ui.separator();
                ui.label("supported formats:");
                ui.label("  .txt, .md (plain text)");
                ui.add_space(4.0);
                ui.label("features:");
                ui.label("  word-level undo and redo");
                ui.label("  recent files");
                ui.label("  proportional & monospace fonts");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn render_shortcuts(&mut self, ctx: &Context) {
        egui::Window::new("keyboard shortcuts")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("file").strong());
                ui.separator();
                shortcut_row(ui, "\u{2318}N", "new document");
                shortcut_row(ui, "\u{2318}O", "open file");
                shortcut_row(ui, "\u{2318}S", "save");
                shortcut_row(ui, "\u{21e7}\u{2318}S", "save as");
                ui.add_space(8.0);
                ui.label(egui::RichText::new("editing").strong());
                ui.separator();
                shortcut_row(ui, "\u{2318}Z", "undo");
                shortcut_row(ui, "\u{2318}Y", "redo");
                shortcut_row(ui, "\u{2318}X", "cut");
                shortcut_row(ui, "\u{2318}C", "copy");
                shortcut_row(ui, "\u{2318}V", "paste");
                shortcut_row(ui, "\u{2318}A", "select all");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_shortcuts = false;
                    }
                });
            });
    }

    fn render_close_confirm(&mut self, ctx: &Context) {
        egui::Window::new("unsaved changes")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("you have unsaved changes.");
                ui.label("do you want to save before closing?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("don't save").clicked() {
                        self.close_confirmed = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("cancel").clicked() {
                        self.show_close_confirm = false;
                    }
                    if ui.button("save").clicked() {
                        self.save_document();
                        if !self.document.modified {
                            self.close_confirmed = true;
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    }
                });
            });
    }
}

fn shortcut_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(shortcut).monospace().strong());
        ui.add_space(20.0);
        ui.label(description);
    });
}

impl eframe::App for InkpadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keyboard(ctx);

        // Drag-and-drop open
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
            if OPEN_EXTENSIONS.contains(&ext.as_str()) {
                self.open_file(path);
            }
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = format!(
                "{} lines  |  {} words, {} chars",
                self.document.line_count(),
                self.document.word_count(),
                self.document.char_count()
            );
            status_bar(ui, &status);
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(InkColors::PAPER).inner_margin(egui::Margin::same(0.0)))
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if self.show_file_browser {
            self.render_file_browser(ctx);
        }
        self.render_overwrite_confirm(ctx);
        self.render_error(ctx);
        if self.show_close_confirm {
            self.render_close_confirm(ctx);
        }
        if self.show_about {
            self.render_about(ctx);
        }
        if self.show_shortcuts {
            self.render_shortcuts(ctx);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            if self.document.modified && !self.close_confirmed {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_close_confirm = true;
            }
        }

        self.sync_window_title(ctx);
        self.repaint.end_frame(ctx);
    }
}
