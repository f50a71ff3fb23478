pub mod activity;
pub mod recipe;
pub mod user;

pub use activity::{Comment, Rating, RecipeStats};
pub use recipe::{Category, Ingredient, NewRecipe, Recipe};
pub use user::User;

/// Declares a numeric identifier newtype.
///
/// Identifiers serialize as bare integers and order by their numeric value,
/// which keeps catalog iteration order stable.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

id_type!(
    /// Identifier of a recipe
    RecipeId
);
id_type!(
    /// Identifier of a recipe category (e.g. "dessert")
    CategoryId
);
id_type!(
    /// Identifier of an ingredient
    IngredientId
);
id_type!(
    /// Identifier of a user account
    UserId
);
id_type!(RatingId);
id_type!(CommentId);
