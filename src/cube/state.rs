use crate::prelude::*;

use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    static ref SOLVED: CubeState = CubeState::build_solved();
}

/// The 26 visible cubelets, in construction order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    cubelets: Vec<Cubelet>,
}

/// Rotates a position a quarter turn about `axis`.
pub fn rotate_position([x, y, z]: Position, axis: Axis, direction: Direction) -> Position {
    match (axis, direction) {
        (Axis::X, Direction::Forward) => [x, -z, y],
        (Axis::X, Direction::Reverse) => [x, z, -y],
        (Axis::Y, Direction::Forward) => [z, y, -x],
        (Axis::Y, Direction::Reverse) => [-z, y, x],
        (Axis::Z, Direction::Forward) => [-y, x, z],
        (Axis::Z, Direction::Reverse) => [y, -x, z],
    }
}

impl CubeLike for CubeState {
    fn solved() -> CubeState {
        SOLVED.clone()
    }

    fn apply(self, move_: Move) -> CubeState {
        self.rotated(move_)
    }

    fn is_solved(&self) -> bool {
        super::solved::is_solved(self)
    }
}

impl CubeState {
    fn build_solved() -> CubeState {
        let mut cubelets = Vec::with_capacity(26);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if (x, y, z) == (0, 0, 0) {
                        continue;
                    }

                    let position = [x, y, z];
                    let mut colors = FaceColors::default();
                    for face in Cubelet::exposed_faces(position) {
                        colors.set(face, face.home_color());
                    }

                    cubelets.push(Cubelet {
                        id: CubeletId(cubelets.len() as u8),
                        position,
                        colors,
                    });
                }
            }
        }
        CubeState { cubelets }
    }

    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// The state after one quarter turn. Cubelets outside the turned layer
    /// are copied unchanged and order is preserved.
    pub fn rotated(&self, move_: Move) -> CubeState {
        let Move {
            axis,
            layer,
            direction,
        } = move_;

        let cubelets = self
            .cubelets
            .iter()
            .map(|cubelet| {
                if !cubelet.in_layer(axis, layer) {
                    return cubelet.clone();
                }
                Cubelet {
                    id: cubelet.id,
                    position: rotate_position(cubelet.position, axis, direction),
                    colors: cubelet.colors.turned(axis, direction),
                }
            })
            .collect();

        CubeState { cubelets }
    }

    pub fn cubelet_at(&self, position: Position) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.position == position)
    }

    /// Color shown on `face` by the cubelet at `position`, if it shows one.
    pub fn facelet(&self, face: Face, position: Position) -> Option<Color> {
        self.cubelet_at(position)?.colors.get(face)
    }

    /// The nine cubelets on the outer layer of `face`.
    pub fn face_layer(&self, face: Face) -> impl Iterator<Item = &Cubelet> {
        self.cubelets
            .iter()
            .filter(move |c| c.coordinate(face.axis()) == face.sign())
    }

    pub fn color_counts(&self) -> HashMap<Color, usize> {
        let mut counts = HashMap::new();
        for cubelet in &self.cubelets {
            for (_, color) in cubelet.facelets() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Checks the structural invariants every reachable state keeps.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.cubelets.len() == 26,
            "expected 26 cubelets, found {}",
            self.cubelets.len()
        );

        let mut seen = HashSet::new();
        for cubelet in &self.cubelets {
            let p = cubelet.position;
            anyhow::ensure!(
                p.iter().all(|c| (-1..=1).contains(c)) && p != [0, 0, 0],
                "cubelet {:?} at invalid position {:?}",
                cubelet.id,
                p
            );
            anyhow::ensure!(seen.insert(p), "two cubelets at {:?}", p);

            let exposed = Cubelet::exposed_faces(p);
            for face in enum_iterator::all::<Face>() {
                anyhow::ensure!(
                    exposed.contains(&face) == cubelet.colors.get(face).is_some(),
                    "cubelet at {:?} has wrong visibility on {}",
                    p,
                    face
                );
            }
        }

        Ok(())
    }
}
