pub mod list;
pub use list::list as other_list;
pub mod c_list;
pub use c_list::c_list as other_c_list;
