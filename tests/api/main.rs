mod completion;
mod location;
mod stub;
