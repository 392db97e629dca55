//! Plain-text rendering of session updates

use proto::{HighscoreRow, Notification, Update, ViewModel};

const CHART_WIDTH: usize = 48;
const CHART_HEIGHT: usize = 12;
const CHART_X_MAX: f64 = 12.0;
const CHART_Y_MAX: f64 = 3.0;

/// Text for one update, `None` when there is nothing worth printing
pub fn render(update: &Update, chart: bool) -> Option<String> {
    match update {
        Update::Notify(notification) => Some(notification_line(notification)),
        Update::Highscores(rows) => Some(highscore_table(rows)),
        Update::Frame(view) if view.firing => flight_line(view),
        Update::Frame(view) => Some(summary(view, chart)),
    }
}

pub fn notification_line(notification: &Notification) -> String {
    format!("[{}] {}", notification.severity.as_str(), notification.text)
}

pub fn highscore_table(rows: &[HighscoreRow]) -> String {
    if rows.is_empty() {
        return "Highscores: none yet".to_string();
    }
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{:<width$}  Score", "Name");
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!("\n{:<width$}  {:>5}", row.name, row.score));
        if rank == 0 {
            out.push_str("  *");
        }
    }
    out
}

/// Latest point of a shot in flight
fn flight_line(view: &ViewModel) -> Option<String> {
    let &(x, y) = view.trajectory.last()?;
    Some(format!("  x={x:6.2}  y={y:6.2}"))
}

fn summary(view: &ViewModel, chart: bool) -> String {
    let mut out = String::new();
    if chart {
        out.push_str(&draw_chart(view));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} | {} | {}\nangle {:.1}°  speed {:.1} m/s  target x={:.2} y={:.2}..{:.2}",
        view.score_text,
        view.highscore_text,
        view.ammo_text,
        view.angle,
        view.speed,
        view.target.x,
        view.target.y_bottom,
        view.target.y_top,
    ));
    out
}

/// Coarse ASCII plot of the trajectory and target over the playfield
pub fn draw_chart(view: &ViewModel) -> String {
    let mut grid = vec![vec![' '; CHART_WIDTH]; CHART_HEIGHT];

    if let Some(col) = column(view.target.x) {
        for (row, line) in grid.iter_mut().enumerate() {
            let y = row_center(row);
            if y >= view.target.y_bottom && y <= view.target.y_top {
                line[col] = '|';
            }
        }
    }

    for &(x, y) in &view.trajectory {
        if let (Some(col), Some(row)) = (column(x), row(y)) {
            grid[row][col] = '.';
        }
    }

    let mut out = String::with_capacity((CHART_WIDTH + 2) * (CHART_HEIGHT + 1));
    for line in &grid {
        out.push('|');
        out.extend(line.iter());
        out.push('\n');
    }
    out.push('+');
    out.push_str(&"-".repeat(CHART_WIDTH));
    out
}

fn column(x: f64) -> Option<usize> {
    if !(0.0..CHART_X_MAX).contains(&x) {
        return None;
    }
    Some((x / CHART_X_MAX * CHART_WIDTH as f64) as usize)
}

fn row(y: f64) -> Option<usize> {
    if !(0.0..CHART_Y_MAX).contains(&y) {
        return None;
    }
    let from_bottom = (y / CHART_Y_MAX * CHART_HEIGHT as f64) as usize;
    Some(CHART_HEIGHT - 1 - from_bottom)
}

fn row_center(row: usize) -> f64 {
    let from_bottom = (CHART_HEIGHT - 1 - row) as f64 + 0.5;
    from_bottom / CHART_HEIGHT as f64 * CHART_Y_MAX
}
