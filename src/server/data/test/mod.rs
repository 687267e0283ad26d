mod event;
mod group;
mod registration;
mod scout;
