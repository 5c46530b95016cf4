mod configure;
mod process_environment;
