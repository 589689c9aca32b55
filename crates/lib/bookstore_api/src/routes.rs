//! Route paths.

pub const POST_REGISTER: &str = "/register";
pub const POST_LOGIN: &str = "/login";

pub const GET_BOOKS: &str = "/books";
pub const GET_BOOKS_ISBN: &str = "/books/isbn/{isbn}";
pub const GET_BOOKS_AUTHOR: &str = "/books/author/{author}";
pub const GET_BOOKS_TITLE: &str = "/books/title/{title}";
pub const GET_BOOKS_REVIEW: &str = "/books/review/{isbn}";
