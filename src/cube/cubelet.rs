use crate::prelude::*;

use smallvec::SmallVec;

/// `[x, y, z]`, each in `-1..=1`.
pub type Position = [i8; 3];

/// Stable identity of a cubelet, fixed when the solved cube is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeletId(pub u8);

/// Colors on the exposed sides of one cubelet, indexed by [`Face`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceColors([Option<Color>; 6]);

impl FaceColors {
    pub fn get(&self, face: Face) -> Option<Color> {
        self.0[face.index()]
    }

    pub fn set(&mut self, face: Face, color: Color) {
        self.0[face.index()] = Some(color);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        enum_iterator::all::<Face>().filter_map(move |face| self.get(face).map(|c| (face, c)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves every present color to the face it points at after the turn.
    /// Absent faces stay absent.
    pub fn turned(&self, axis: Axis, direction: Direction) -> FaceColors {
        let mut out = FaceColors::default();
        for (face, color) in self.iter() {
            out.set(face.turned(axis, direction), color);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubelet {
    pub id: CubeletId,
    pub position: Position,
    pub colors: FaceColors,
}

impl Cubelet {
    /// Position-derived key, e.g. `"1,-1,0"`. Changes whenever the cubelet moves;
    /// use [`Cubelet::id`] for identity that survives moves.
    pub fn key(&self) -> String {
        let [x, y, z] = self.position;
        format!("{},{},{}", x, y, z)
    }

    pub fn coordinate(&self, axis: Axis) -> i8 {
        self.position[axis.index()]
    }

    pub fn in_layer(&self, axis: Axis, layer: Layer) -> bool {
        self.coordinate(axis) == layer.coordinate()
    }

    /// Faces a cubelet at `position` shows to the outside.
    pub fn exposed_faces(position: Position) -> SmallVec<[Face; 3]> {
        enum_iterator::all::<Face>()
            .filter(|face| position[face.axis().index()] == face.sign())
            .collect()
    }

    pub fn facelets(&self) -> SmallVec<[(Face, Color); 3]> {
        self.colors.iter().collect()
    }
}
