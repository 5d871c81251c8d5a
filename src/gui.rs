// src/gui.rs
use eframe::egui;
use egui::{Color32, Rect, Vec2};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};
use crate::drivers::{PlotterError, SampleStats, Waveform};
use crate::waveform::{FigureView, InsetRect, TraceView};
const TRACE_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
pub struct WaveformApp {
    figure: FigureView,
    // 预先转换好的绘图点，避免每帧重新构造
    main_points: Vec<[f64; 2]>,
    inset_points: Vec<[f64; 2]>,
    // 下一帧是否把主图视野恢复为初始范围
    reset_view: bool,
    status: String,
}
impl WaveformApp {
    pub fn new(figure: FigureView, waveform: &Waveform, source_label: &str) -> Self {
        let main_points = figure.main.pairs();
        let inset_points = figure.inset.pairs();
        Self {
            status: status_line(source_label, waveform),
            figure,
            main_points,
            inset_points,
            reset_view: true,
        }
    }
    /// Draw one frame. Split from `update` so it can run against a bare `egui::Context`.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🔄 RESET VIEW").clicked() {
                    self.reset_view = true;
                }
                ui.monospace(&self.status);
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            // 插图位置按整张图的归一化坐标计算，和主图共用同一块区域
            let figure_rect = ui.max_rect();
            ui.vertical_centered(|ui| ui.heading(&self.figure.title));
            self.draw_main(ui);
            self.draw_inset(ui, inset_screen_rect(figure_rect, &self.figure.inset_rect));
        });
    }
    fn draw_main(&mut self, ui: &mut egui::Ui) {
        let reset = std::mem::take(&mut self.reset_view);
        let bounds = bounds_of(&self.figure.main);
        let points = self.main_points.clone();
        Plot::new("waveform_main")
            .x_axis_label(self.figure.x_label.clone())
            .y_axis_label(self.figure.y_label.clone())
            .show_grid(self.figure.grid)
            .show(ui, |plot_ui| {
                if reset {
                    plot_ui.set_plot_bounds(bounds);
                }
                plot_ui.line(Line::new(PlotPoints::new(points)).color(TRACE_COLOR));
            });
    }
    fn draw_inset(&self, ui: &mut egui::Ui, rect: Rect) {
        if rect.width() <= 1.0 || rect.height() <= 1.0 {
            return;
        }
        ui.painter()
            .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        let bounds = bounds_of(&self.figure.inset);
        let points = self.inset_points.clone();
        ui.allocate_ui_at_rect(rect, |ui| {
            Plot::new("waveform_inset")
                .width(rect.width())
                .height(rect.height())
                .show_grid(self.figure.grid)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(bounds);
                    plot_ui.line(Line::new(PlotPoints::new(points)).color(TRACE_COLOR));
                });
        });
    }
}
impl eframe::App for WaveformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
/// Open the plot window and block until the user closes it.
pub fn run_blocking(app: WaveformApp, size_px: [f32; 2]) -> Result<(), PlotterError> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(size_px)
        .with_min_inner_size([600.0, 300.0])
        .with_title(app.figure.title.clone());
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("waveplot", options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}
fn bounds_of(trace: &TraceView) -> PlotBounds {
    PlotBounds::from_min_max(
        [trace.x_range.0, trace.y_range.0],
        [trace.x_range.1, trace.y_range.1],
    )
}
/// Map a normalized figure rectangle (origin bottom-left) onto screen space (origin top-left).
fn inset_screen_rect(figure: Rect, inset: &InsetRect) -> Rect {
    let (w, h) = (figure.width(), figure.height());
    let min = egui::pos2(
        figure.min.x + inset.left as f32 * w,
        figure.max.y - (inset.bottom + inset.height) as f32 * h,
    );
    Rect::from_min_size(
        min,
        Vec2::new(inset.width as f32 * w, inset.height as f32 * h),
    )
}
fn status_line(source_label: &str, waveform: &Waveform) -> String {
    let head = format!(
        "{} | {} samples | {:.3} s @ {} Hz",
        source_label,
        waveform.len(),
        waveform.duration_seconds(),
        waveform.sample_rate_hz()
    );
    match waveform.stats() {
        Some(SampleStats { min, max, rms, peak }) => {
            format!("{head} | min {min:.3} max {max:.3} rms {rms:.3} peak {peak:.3}")
        }
        None => head,
    }
}
