mod home;
mod not_found;
mod subject;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use subject::{ChemistryPage, MathematicsPage, PhysicsPage, SubjectPage};
