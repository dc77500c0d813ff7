pub mod pages;
pub mod site_files;
pub mod vitals;
