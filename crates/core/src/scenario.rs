//! Built-in case: the mansion layout and the clue/suspect associations.

use once_cell::sync::Lazy;

use crate::{
    map::{MansionMap, MapError, RoomSpec},
    suspects::{IndexError, SuspectIndex},
};

/// A clue and the suspect it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    /// Exact clue text, as found in a room.
    pub clue: String,
    /// Suspect the clue implicates.
    pub suspect: String,
}

impl Association {
    /// Pair a clue with a suspect.
    pub fn new(clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

/// Everything needed to start a game: where the rooms are and whom each clue accuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Name shown by frontends.
    pub title: String,
    /// Root room of the mansion.
    pub map: RoomSpec,
    /// Clue to suspect table, applied in order.
    pub associations: Vec<Association>,
}

//                 Hall
//                /    \
//        Sala de Estar  Biblioteca
//           /    \            \
//      Cozinha   Jardim     Laboratório
//          \
//       Porão Secreto
static MANSION: Lazy<Scenario> = Lazy::new(|| Scenario {
    title: "Detective Quest".to_string(),
    map: RoomSpec::new("Hall de Entrada", Some("Pegadas misteriosas no tapete"))
        .with_left(
            RoomSpec::new("Sala de Estar", Some("Um colar quebrado"))
                .with_left(
                    RoomSpec::new("Cozinha", Some("Faca com marcas de sangue")).with_right(
                        RoomSpec::new("Porão Secreto", Some("Mapa antigo da mansão")),
                    ),
                )
                .with_right(RoomSpec::new("Jardim", Some("Luva de couro encontrada"))),
        )
        .with_right(
            RoomSpec::new("Biblioteca", Some("Livro com páginas arrancadas")).with_right(
                RoomSpec::new("Laboratório", Some("Frascos com rótulos estranhos")),
            ),
        ),
    associations: vec![
        Association::new("Pegadas misteriosas no tapete", "Sr. Branco"),
        Association::new("Um colar quebrado", "Sra. Rosa"),
        Association::new("Livro com páginas arrancadas", "Prof. Verde"),
        Association::new("Faca com marcas de sangue", "Sr. Branco"),
        Association::new("Luva de couro encontrada", "Sr. Cinza"),
        Association::new("Mapa antigo da mansão", "Sra. Rosa"),
        Association::new("Frascos com rótulos estranhos", "Prof. Verde"),
    ],
});

impl Scenario {
    /// The stock seven-room mansion.
    pub fn mansion() -> Self {
        MANSION.clone()
    }

    /// Build the navigable mansion.
    pub fn build_map(&self) -> Result<MansionMap, MapError> {
        MansionMap::build(&self.map)
    }

    /// Load every association into a fresh index with `buckets` buckets.
    pub fn build_index(&self, buckets: usize) -> Result<SuspectIndex, IndexError> {
        let mut index = SuspectIndex::with_buckets(buckets)?;
        index.extend(
            self.associations
                .iter()
                .map(|association| (&association.clue, &association.suspect)),
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Direction;

    #[test]
    fn mansion_has_seven_rooms_with_clues() {
        let scenario = Scenario::mansion();
        let map = scenario.build_map().unwrap();
        assert_eq!(map.len(), 7);
        assert!(map.rooms().all(|room| room.clue().is_some()));

        let hall = map.root();
        let sala = map.traverse_step(hall, Direction::Left).unwrap();
        let cozinha = map.traverse_step(sala, Direction::Left).unwrap();
        assert_eq!(map.traverse_step(cozinha, Direction::Left), None);
        assert_eq!(map.child_name(cozinha, Direction::Right), Some("Porão Secreto"));
        assert_eq!(map.child_name(hall, Direction::Right), Some("Biblioteca"));
    }

    #[test]
    fn every_room_clue_has_a_suspect() {
        let scenario = Scenario::mansion();
        let map = scenario.build_map().unwrap();
        let index = scenario.build_index(101).unwrap();
        assert_eq!(index.len(), 7);
        for room in map.rooms() {
            let clue = room.clue().unwrap();
            assert!(index.get(clue).is_some(), "no suspect for {clue}");
        }
        assert_eq!(
            index.suspects(),
            vec!["Prof. Verde", "Sr. Branco", "Sr. Cinza", "Sra. Rosa"]
        );
    }

    #[test]
    fn index_build_propagates_bucket_errors() {
        assert_eq!(
            Scenario::mansion().build_index(0).unwrap_err(),
            IndexError::ZeroBuckets
        );
    }
}
