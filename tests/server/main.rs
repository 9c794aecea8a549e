mod contact_form;
mod pages;
