//! Example Profile
//!
//! The built-in profile offered by "Load Example". Every call builds a new,
//! independently owned value with identical content.

use super::types::{
    Education, Experience, Language, PersonalInfo, Profile, Project, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the example profile
pub fn example_profile() -> Profile {
    Profile {
        personal_info: PersonalInfo {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            location: "Melbourne, Australia".to_string(),
            linkedin: "linkedin.com/in/alexjohnson".to_string(),
            portfolio: "alexjohnson.portfolio.com".to_string(),
        },
        skills: Skills {
            technical: strings(&[
                "AutoCAD",
                "SolidWorks",
                "Fusion 360",
                "CATIA",
                "Python",
                "MATLAB",
                "FEA Analysis",
                "3D Printing",
            ]),
            soft_skills: strings(&[
                "Project Management",
                "Team Leadership",
                "Problem Solving",
                "Client Communication",
                "Technical Documentation",
                "Quality Assurance",
            ]),
            certifications: strings(&[
                "Certified SolidWorks Professional (CSWP)",
                "Six Sigma Green Belt",
                "Project Management Professional (PMP)",
            ]),
        },
        education: vec![
            Education {
                institution: "University of Melbourne".to_string(),
                degree: "Bachelor of Engineering (Mechanical)".to_string(),
                graduation_date: "2021".to_string(),
                gpa: Some("3.8/4.0".to_string()),
                relevant_coursework: strings(&[
                    "Machine Design",
                    "Thermodynamics",
                    "Fluid Mechanics",
                    "Materials Science",
                    "Robotics",
                ]),
            },
            Education {
                institution: "RMIT University".to_string(),
                degree: "Certificate in Industrial Design".to_string(),
                graduation_date: "2022".to_string(),
                gpa: None,
                relevant_coursework: strings(&[
                    "Product Development",
                    "Design Thinking",
                    "Manufacturing Processes",
                ]),
            },
        ],
        experience: vec![
            Experience {
                company: "TechInnovate Solutions".to_string(),
                position: "Mechanical Design Engineer".to_string(),
                duration: "2021-Present".to_string(),
                location: "Melbourne, Australia".to_string(),
                responsibilities: strings(&[
                    "Designed mechanical components for industrial automation systems using SolidWorks",
                    "Collaborated with electrical engineers to develop integrated systems",
                    "Conducted structural and thermal analyses using FEA software",
                    "Created detailed manufacturing drawings and specifications",
                    "Managed prototype development and testing phases",
                ]),
                achievements: strings(&[
                    "Reduced production costs by 15% through design optimization",
                    "Led team of 3 junior engineers for major client project",
                    "Implemented new design review process that improved quality metrics by 20%",
                ]),
            },
            Experience {
                company: "GlobalManufacturing Inc.".to_string(),
                position: "Mechanical Engineering Intern".to_string(),
                duration: "2020-2021".to_string(),
                location: "Sydney, Australia".to_string(),
                responsibilities: strings(&[
                    "Assisted senior engineers with CAD modeling and drawing creation",
                    "Conducted product testing and documented results",
                    "Participated in design review meetings and provided input",
                    "Researched materials and components for new product development",
                ]),
                achievements: strings(&[
                    "Developed an automated testing fixture that reduced testing time by 30%",
                    "Recognized for exceptional attention to detail in documentation",
                ]),
            },
        ],
        projects: vec![
            Project {
                title: "Automated Sorting System".to_string(),
                description: "Designed and built a small-scale automated sorting system using Arduino, sensors, and custom 3D printed components".to_string(),
                technologies: strings(&["Arduino", "CAD", "3D Printing", "Python"]),
                url: "github.com/alexj/sorting-system".to_string(),
            },
            Project {
                title: "Energy-Efficient HVAC Controller".to_string(),
                description: "Developed a smart HVAC control system that optimized energy usage based on occupancy and environmental factors".to_string(),
                technologies: strings(&["IoT", "MATLAB", "Thermodynamic Modeling"]),
                url: "alexjohnson.portfolio.com/hvac-project".to_string(),
            },
        ],
        languages: vec![
            Language::new("English", "Native"),
            Language::new("Mandarin", "Conversational"),
        ],
        interests: strings(&[
            "Sustainable product design",
            "Additive manufacturing",
            "Renewable energy systems",
            "Robotics competitions",
            "Open-source hardware",
        ]),
    }
}
