use crate::prelude::*;

/// True when each of the six faces shows a single color across its nine
/// cubelets. A cube turned as a whole still counts as solved.
pub fn is_solved(cube: &CubeState) -> bool {
    enum_iterator::all::<Face>().all(|face| face_is_uniform(cube, face))
}

fn face_is_uniform(cube: &CubeState, face: Face) -> bool {
    let mut colors = cube.face_layer(face).map(|c| c.colors.get(face));
    match colors.next() {
        Some(Some(first)) => colors.all(|c| c == Some(first)),
        _ => false,
    }
}
