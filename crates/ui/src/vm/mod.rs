mod catalog_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use catalog_vm::{CatalogItemVm, map_catalog_items};
pub use quiz_vm::{OptionVm, QuestionVm, map_questions};
pub use results_vm::{ResultRowVm, ResultsVm, map_results};
