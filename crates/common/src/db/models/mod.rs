//! SeaORM entity models

mod paper;

pub use paper::{
    Entity as PaperEntity,
    Model as Paper,
    ActiveModel as PaperActiveModel,
    Column as PaperColumn,
    ConditionSet,
    ConditionSets,
};
