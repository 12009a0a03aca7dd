mod client;
mod debounce;
