use ratatui::layout::Rect;

/// Centered rectangle taking `percent_x`/`percent_y` of `area`, capped at
/// `max_width` x `max_height`
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16, max_width: u16, max_height: u16) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, percent_x).min(max_width).min(area.width);
    let height = scale(area.height, percent_y).min(max_height).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// `rect` moved by (`dx`, `dy`) cells and clipped to `bounds`.
///
/// Returns `None` once nothing of it is left inside `bounds`.
pub fn offset_rect(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(rect.x) + dx;
    let top = i32::from(rect.y) + dy;
    let right = left + i32::from(rect.width);
    let bottom = top + i32::from(rect.height);

    let clip_left = left.max(i32::from(bounds.x));
    let clip_top = top.max(i32::from(bounds.y));
    let clip_right = right.min(i32::from(bounds.right()));
    let clip_bottom = bottom.min(i32::from(bounds.bottom()));

    if clip_right <= clip_left || clip_bottom <= clip_top {
        return None;
    }
    Some(Rect::new(
        clip_left as u16,
        clip_top as u16,
        (clip_right - clip_left) as u16,
        (clip_bottom - clip_top) as u16,
    ))
}
