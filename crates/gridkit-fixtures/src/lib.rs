pub mod builtin;
pub mod fixture;
pub mod registry;

pub use builtin::{
    FreezePaneFixture, HiddenColumnsFixture, HideSecondRowFixture, SampleInventoryFixture,
    TallHeaderRowFixture,
};
pub use fixture::{FixtureBox, FixtureError, SpreadsheetFixture};
pub use registry::{FixtureFactory, FixtureRegistry};
