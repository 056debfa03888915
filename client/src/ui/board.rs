use common::engine::{Board, Mark, MatchStatus};
use eframe::egui;

pub struct BoardUi {
    last_hover: Option<usize>,
}

struct BoardPalette {
    background: egui::Color32,
    grid: egui::Color32,
    x_mark: egui::Color32,
    o_mark: egui::Color32,
    win_highlight: egui::Color32,
    hover: egui::Color32,
}

impl BoardPalette {
    fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: egui::Color32::from_rgb(32, 33, 36),
                grid: egui::Color32::from_rgb(95, 99, 104),
                x_mark: egui::Color32::from_rgb(235, 87, 87),
                o_mark: egui::Color32::from_rgb(100, 149, 237),
                win_highlight: egui::Color32::from_rgba_unmultiplied(255, 213, 79, 60),
                hover: egui::Color32::from_rgba_unmultiplied(138, 180, 248, 40),
            }
        } else {
            Self {
                background: egui::Color32::from_rgb(240, 240, 240),
                grid: egui::Color32::BLACK,
                x_mark: egui::Color32::from_rgb(220, 50, 50),
                o_mark: egui::Color32::from_rgb(50, 50, 220),
                win_highlight: egui::Color32::from_rgba_unmultiplied(255, 193, 7, 70),
                hover: egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            }
        }
    }
}

impl BoardUi {
    const SIDE: usize = 3;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_STROKE_WIDTH: f32 = 4.0;
    const MIN_CELL_SIZE: f32 = 50.0;
    const MAX_CELL_SIZE: f32 = 140.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    // Returns the board rect and the index of an empty cell the player
    // clicked, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        status: MatchStatus,
        dark_mode: bool,
    ) -> (egui::Rect, Option<usize>) {
        let palette = BoardPalette::for_theme(dark_mode);

        let available = ui.available_width().min(ui.available_height());
        let cell_size =
            (available / Self::SIDE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        let board_side = cell_size * Self::SIDE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, palette.background);

        if let MatchStatus::Won { line, .. } = status {
            for index in line {
                painter.rect_filled(
                    Self::cell_rect(rect, index, cell_size),
                    0.0,
                    palette.win_highlight,
                );
            }
        }

        for i in 0..=Self::SIDE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, palette.grid),
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, palette.grid),
            );
        }

        for (index, &mark) in board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect, palette.x_mark),
                Mark::O => Self::draw_o(painter, cell_rect, palette.o_mark),
                Mark::Empty => {}
            }
        }

        let clicked = self.handle_pointer(board, status, rect, cell_size, &response, painter, &palette);
        (rect, clicked)
    }

    fn handle_pointer(
        &mut self,
        board: &Board,
        status: MatchStatus,
        rect: egui::Rect,
        cell_size: f32,
        response: &egui::Response,
        painter: &egui::Painter,
        palette: &BoardPalette,
    ) -> Option<usize> {
        if status != MatchStatus::InProgress {
            self.last_hover = None;
            return None;
        }

        self.last_hover = None;
        if let Some(hover_pos) = response.hover_pos() {
            let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

            if col < Self::SIDE && row < Self::SIDE {
                let index = row * Self::SIDE + col;
                if board.cell(index) == Mark::Empty {
                    painter.rect_filled(
                        Self::cell_rect(rect, index, cell_size),
                        0.0,
                        palette.hover,
                    );
                    self.last_hover = Some(index);
                }
            }
        }

        if response.clicked() { self.last_hover } else { None }
    }

    fn cell_rect(rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let col = index % Self::SIDE;
        let row = index / Self::SIDE;
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + col as f32 * cell_size,
                rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_STROKE_WIDTH, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(Self::MARK_STROKE_WIDTH, color);

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
