use crate::geometry::point::IntPoint;

pub type Path = Vec<IntPoint>;

pub type Paths = Vec<Path>;

/// Signed area; positive when the path winds counter-clockwise (Y axis pointing up).
pub fn area(path: &[IntPoint]) -> f64 {
    let size = path.len();
    if size < 3 {
        return 0.0;
    }

    let mut a = 0.0;
    let mut j = size - 1;
    for i in 0..size {
        a += (path[j].x as f64 + path[i].x as f64) * (path[j].y as f64 - path[i].y as f64);
        j = i;
    }

    -a * 0.5
}

pub fn orientation(path: &[IntPoint]) -> bool {
    area(path) >= 0.0
}

pub fn reverse_path(path: &mut Path) {
    path.reverse();
}

pub fn reverse_paths(paths: &mut Paths) {
    paths.iter_mut().for_each(reverse_path);
}

/// Returns 0 when `pt` is outside `path`, 1 when inside and -1 when it lies on the boundary.
pub fn point_in_polygon(pt: &IntPoint, path: &[IntPoint]) -> i32 {
    let count = path.len();
    if count < 3 {
        return 0;
    }

    let mut result = 0;
    let mut ip = path[0];

    for i in 1..=count {
        let ip_next = if i == count { path[0] } else { path[i] };

        match crossing_state(pt, &ip, &ip_next) {
            Crossing::OnEdge => return -1,
            Crossing::Toggle => result = 1 - result,
            Crossing::None => {}
        }

        ip = ip_next;
    }

    result
}

pub enum Crossing {
    None,
    Toggle,
    OnEdge,
}

/// Classifies the edge `ip -> ip_next` for a ray cast from `pt` towards +X.
pub fn crossing_state(pt: &IntPoint, ip: &IntPoint, ip_next: &IntPoint) -> Crossing {
    if ip_next.y == pt.y
        && (ip_next.x == pt.x || (ip.y == pt.y && ((ip_next.x > pt.x) == (ip.x < pt.x))))
    {
        return Crossing::OnEdge;
    }

    if (ip.y < pt.y) == (ip_next.y < pt.y) {
        return Crossing::None;
    }

    if ip.x >= pt.x && ip_next.x > pt.x {
        return Crossing::Toggle;
    }

    if ip.x >= pt.x || ip_next.x > pt.x {
        let d = (ip.x - pt.x) as f64 * (ip_next.y - pt.y) as f64
            - (ip_next.x - pt.x) as f64 * (ip.y - pt.y) as f64;

        if d == 0.0 {
            return Crossing::OnEdge;
        }

        if (d > 0.0) == (ip_next.y > ip.y) {
            return Crossing::Toggle;
        }
    }

    Crossing::None
}
