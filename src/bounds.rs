use crate::Projection;

/// Projects the four corners of a geographic box `[min_lon, min_lat, max_lon, max_lat]`
/// (degrees) and returns the enclosing grid rectangle `[x0, y0, x1, y1]`.
///
/// Only the corners are transformed. Under a conic or transverse projection the box's
/// edges bow outward, so for large boxes the result can under-estimate the true extent.
///
/// Returns `None` unless exactly four values are given.
///
/// # Usage
///
/// ```
/// use geoproj::{bounds, systems::Nztm2000};
///
/// let nztm = Nztm2000::new();
/// let [x0, y0, x1, y1] = bounds(&nztm, &[172.0, -44.0, 174.0, -40.0]).unwrap();
/// assert!(x0 < x1 && y0 < y1);
///
/// assert!(bounds(&nztm, &[172.0, -44.0, 174.0]).is_none());
/// ```
pub fn bounds<P: Projection + ?Sized>(projection: &P, bbox: &[f64]) -> Option<[f64; 4]> {
    let &[min_lon, min_lat, max_lon, max_lat] = bbox else {
        return None;
    };

    let corners = [
        (min_lon, min_lat),
        (min_lon, max_lat),
        (max_lon, max_lat),
        (max_lon, min_lat),
    ];

    let first = projection.forward(corners[0].0, corners[0].1);
    let extent = corners[1..]
        .iter()
        .map(|&(lon, lat)| projection.forward(lon, lat))
        .fold([first.0, first.1, first.0, first.1], |[x0, y0, x1, y1], (x, y)| {
            [x0.min(x), y0.min(y), x1.max(x), y1.max(y)]
        });

    Some(extent)
}
