mod bubble;
mod insertion;
