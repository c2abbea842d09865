mod grades;

pub(crate) use grades::GradesPage;
