use common::model::profile::ProfileField;
use common::model::project::ProjectField;

#[derive(Clone)]
pub enum Msg {
    SetTab(String),
    UpdateProfile(ProfileField, String),
    AddProject,
    UpdateProject(i64, ProjectField, String),
    SelectTemplate(String),
    Generate,
}
