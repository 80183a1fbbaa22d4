// File: crates/xyplot-core/src/chart.rs
// Summary: Chart struct and the assembly pipeline from series + options to a primitive tree.

use tracing::debug;

use crate::axis::Axis;
use crate::clip::clip_polyline;
use crate::error::{AxisKind, PlotError, Result};
use crate::geometry::{Point, Region};
use crate::options::PlotOptions;
use crate::scale::{PlotTransform, ScaleTransform};
use crate::scene::{Group, Primitive, Role, Scene};
use crate::series::Series;
use crate::theme::StyleSheet;
use crate::types::{FONT_SIZE, TICK_SIZE};
use crate::view::ViewState;

/// A prepared data set plus the options to draw it with.
#[derive(Clone, Debug)]
pub struct Chart {
    series: Series,
    pub options: PlotOptions,
}

impl Chart {
    /// Sort the series by x and compute its extents.
    /// Fails with fewer than two samples.
    pub fn new(mut series: Series, options: PlotOptions) -> Result<Self> {
        if series.len() < 2 {
            return Err(PlotError::TooFewSamples { found: series.len() });
        }
        series.sort_by_x();
        series.recompute_extents()?;
        Ok(Self { series, options })
    }

    pub fn series(&self) -> &Series { &self.series }

    /// Build the primitive tree anchored to `region`.
    pub fn build_scene(&self, region: Region) -> Result<Scene> {
        assemble(&self.series, region, &self.options)
    }
}

/// Compose axes, ticks, grid, data paths, borders and labels for `series`.
///
/// `series` must be sorted with extents computed (see [`Chart::new`]). Every
/// configuration check runs before the first primitive is built, so an error never
/// leaves a partial tree behind.
pub fn assemble(series: &Series, region: Region, options: &PlotOptions) -> Result<Scene> {
    region.validate()?;
    if series.len() < 2 {
        return Err(PlotError::TooFewSamples { found: series.len() });
    }
    let view = ViewState::resolve(series, options.x.bounds(), options.y.bounds())?;
    let x_format = options.x.number_format()?;
    let y_format = options.y.number_format()?;
    let theme = options.theme()?;
    let styles = theme.style_sheet(options.stroke.width_px(), FONT_SIZE, options.background);

    let x_axis = Axis::try_new(region.bottom_left(), region.bottom_right(), view.x_min, view.x_max)?;
    let y_axis = Axis::try_new(region.bottom_left(), region.top_left(), view.y_min, view.y_max)?;

    let mut root = Group::new(Role::Plot);

    if let Some(fill) = styles.background {
        root.push(Group::with_shapes(Role::Background, [Primitive::filled_rect(region, fill)]));
    }

    let (xn, xm) = (options.x.ticks as usize, options.x.subticks as usize);
    let (yn, ym) = (options.y.ticks as usize, options.y.subticks as usize);

    if options.x.grid {
        let h = region.height();
        push_group(&mut root, Role::Grid(AxisKind::X), x_axis.main_ticks(xn, 0.0, -h, &styles.grid));
        push_group(&mut root, Role::SubGrid(AxisKind::X), x_axis.sub_ticks(xn, xm, 0.0, -h, &styles.subgrid));
    }
    if options.y.grid {
        let w = region.width();
        push_group(&mut root, Role::Grid(AxisKind::Y), y_axis.main_ticks(yn, 0.0, w, &styles.grid));
        push_group(&mut root, Role::SubGrid(AxisKind::Y), y_axis.sub_ticks(yn, ym, 0.0, w, &styles.subgrid));
    }

    if xn > 0 {
        let from = if options.x.ticks_in { -TICK_SIZE } else { 0.0 };
        let to = if options.x.ticks_out { TICK_SIZE } else { 0.0 };
        push_group(&mut root, Role::Ticks(AxisKind::X), x_axis.main_ticks(xn, from, to, &styles.tick));
        push_group(
            &mut root,
            Role::SubTicks(AxisKind::X),
            x_axis.sub_ticks(xn, xm, 0.5 * from, 0.5 * to, &styles.subtick),
        );
        push_group(
            &mut root,
            Role::TickLabels(AxisKind::X),
            x_axis.rotated_tick_labels(xn, &x_format, 3.0 * TICK_SIZE, 0.0, &styles.text_middle, options.x.label_angle),
        );
    }
    if yn > 0 {
        // y runs bottom to top, so its normal points into the plot
        let from = if options.y.ticks_out { -TICK_SIZE } else { 0.0 };
        let to = if options.y.ticks_in { TICK_SIZE } else { 0.0 };
        push_group(&mut root, Role::Ticks(AxisKind::Y), y_axis.main_ticks(yn, from, to, &styles.tick));
        push_group(
            &mut root,
            Role::SubTicks(AxisKind::Y),
            y_axis.sub_ticks(yn, ym, 0.5 * from, 0.5 * to, &styles.subtick),
        );
        push_group(
            &mut root,
            Role::TickLabels(AxisKind::Y),
            y_axis.rotated_tick_labels(
                yn,
                &y_format,
                -2.0 * TICK_SIZE,
                -0.3 * FONT_SIZE,
                &styles.text_end,
                options.y.label_angle,
            ),
        );
    }

    let transform = PlotTransform::new(region, view.window());
    let window = view.window();
    for column in 0..series.columns() {
        let segments = clip_polyline(series.column(column), &window, |p| transform.to_screen(p));
        debug!(column, segments = segments.len(), "clipped data path");
        let mut group = Group::new(Role::Series(column));
        if !segments.is_empty() {
            group.push(Primitive::path(segments, styles.path));
        }
        root.push(group);
    }

    push_group(&mut root, Role::Borders, borders(&region, options, &styles));
    push_group(&mut root, Role::Labels, labels(&region, options, &styles));

    if options.store_data {
        root.data_values = Some(data_values(series));
    }

    debug!(
        primitives = root.primitives().len(),
        x_min = view.x_min,
        x_max = view.x_max,
        y_min = view.y_min,
        y_max = view.y_max,
        "assembled plot"
    );

    Ok(Scene { region, viewport: viewport(&region), root })
}

// ---- helpers ----------------------------------------------------------------

fn push_group(root: &mut Group, role: Role, shapes: Vec<Primitive>) {
    if !shapes.is_empty() {
        root.push(Group::with_shapes(role, shapes));
    }
}

fn borders(r: &Region, options: &PlotOptions, styles: &StyleSheet) -> Vec<Primitive> {
    let b = &options.border;
    [
        (b.left, r.top_left(), r.bottom_left()),
        (b.bottom, r.bottom_left(), r.bottom_right()),
        (b.right, r.top_right(), r.bottom_right()),
        (b.top, r.top_left(), r.top_right()),
    ]
    .into_iter()
    .filter(|(on, _, _)| *on)
    .map(|(_, from, to)| Primitive::line(from, to, styles.border))
    .collect()
}

fn labels(r: &Region, options: &PlotOptions, styles: &StyleSheet) -> Vec<Primitive> {
    let l = &options.labels;
    let c = r.center();
    let mut out = Vec::new();
    if !l.title.is_empty() {
        out.push(Primitive::text(Point::new(c.x, r.top - FONT_SIZE), &l.title, styles.title));
    }
    if !l.y_axis.is_empty() {
        let at = Point::new(r.left - 4.0 * FONT_SIZE, c.y);
        out.push(Primitive::rotated_text(at, &l.y_axis, styles.text_middle, -90.0));
    }
    if !l.x_axis.is_empty() {
        out.push(Primitive::text(Point::new(c.x, r.bottom + 3.5 * FONT_SIZE), &l.x_axis, styles.text_middle));
    }
    out
}

/// `[[x,y0,y1,...],...]` in sample order.
fn data_values(series: &Series) -> String {
    let rows = series
        .samples()
        .iter()
        .map(|s| {
            let ys = s.ys.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(",");
            format!("[{},{}]", s.x, ys)
        })
        .collect::<Vec<_>>();
    format!("[{}]", rows.join(","))
}

/// Region grown by the room tick labels, axis labels and title need.
fn viewport(r: &Region) -> Region {
    Region::from_ltrb(
        r.left - 5.0 * FONT_SIZE,
        r.top - 3.0 * FONT_SIZE,
        r.right + 2.0 * FONT_SIZE,
        r.bottom + 5.0 * FONT_SIZE,
    )
}
