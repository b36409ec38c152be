mod contact;

pub use contact::ContactResponse;
