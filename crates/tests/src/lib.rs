#[cfg(test)]
mod common;

#[cfg(test)]
mod directory_tests;

#[cfg(test)]
mod requisition_tests;

#[cfg(test)]
mod resume_pdf_tests;

#[cfg(test)]
mod role_gate_tests;

#[cfg(test)]
mod seed_file_tests;
